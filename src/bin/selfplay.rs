use chess_rules::game::{Game, GameStatus};
use chess_rules::snapshot::build_board_state;
use chess_rules::GameResult;
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

/// Play random legal moves from the starting position until the game ends.
#[derive(Parser, Debug)]
struct Args {
    /// Stop after this many moves if the game has not ended.
    #[arg(long, default_value_t = 200)]
    max_moves: u32,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final position as JSON instead of a grid.
    #[arg(long)]
    json: bool,
}

fn play(args: &Args) -> GameResult<(Game, GameStatus, u32)> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut game = Game::new();
    let mut move_count = 0;
    let mut status = game.status(game.team_turn())?;

    while move_count < args.max_moves
        && !matches!(status, GameStatus::Checkmate | GameStatus::Stalemate)
    {
        let moves = game.all_valid_moves(game.team_turn())?;
        let Some(&m) = moves.choose(&mut rng) else {
            break;
        };
        tracing::info!(ply = move_count + 1, color = %game.team_turn(), mv = %m, "move");
        game.make_move(m)?;
        move_count += 1;

        status = game.status(game.team_turn())?;
        if status == GameStatus::Check {
            tracing::info!(color = %game.team_turn(), "check");
        }
    }

    Ok((game, status, move_count))
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let (game, status, move_count) = match play(&args) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(%e, "self-play stopped");
            std::process::exit(1);
        }
    };

    let result = match status {
        GameStatus::Checkmate => format!("{} wins", game.team_turn().opposite()),
        GameStatus::Stalemate => "draw by stalemate".to_string(),
        _ => "no result".to_string(),
    };
    eprintln!("Game over after {move_count} moves: {result}");

    if args.json {
        match build_board_state(&game).map(|state| serde_json::to_string_pretty(&state)) {
            Ok(Ok(text)) => println!("{text}"),
            Ok(Err(e)) => tracing::error!(%e, "could not encode position"),
            Err(e) => tracing::error!(%e, "could not build position"),
        }
    } else {
        print!("{}", game.board());
    }
}
