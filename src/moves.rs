use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseMoveError;
use crate::piece::PieceType;
use crate::position::Position;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    pub promotion: Option<PieceType>,
}

impl Move {
    pub fn new(start: Position, end: Position, promotion: Option<PieceType>) -> Self {
        Move { start, end, promotion }
    }

    /// A move with no promotion.
    pub fn quiet(start: Position, end: Position) -> Self {
        Move::new(start, end, None)
    }

    /// Convert to UCI notation, e.g. "e2e4", "a7a8q"
    pub fn to_uci(&self) -> String {
        let promo = self.promotion.map(|pt| pt.symbol().to_string()).unwrap_or_default();
        format!("{}{}{promo}", self.start, self.end)
    }

    /// Parse from UCI notation. Squares are validated; legality is not.
    pub fn from_uci(s: &str) -> Result<Move, ParseMoveError> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(ParseMoveError::WrongLength(s.to_string()));
        }
        let start: Position = s[0..2].parse()?;
        let end: Position = s[2..4].parse()?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceType::from_symbol(c) {
                Some(pt) if PieceType::PROMOTIONS.contains(&pt) => Some(pt),
                _ => return Err(ParseMoveError::BadPromotion(c)),
            },
        };
        Ok(Move { start, end, promotion })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_uci(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParsePositionError;

    #[test]
    fn uci_text() {
        let mv = Move::new(Position::new(7, 1), Position::new(8, 1), Some(PieceType::Queen));
        assert_eq!(mv.to_uci(), "a7a8q");
        assert_eq!("a7a8Q".parse::<Move>(), Ok(mv));
        assert_eq!(
            Move::from_uci("e2e4"),
            Ok(Move::quiet(Position::new(2, 5), Position::new(4, 5)))
        );
    }

    #[test]
    fn rejects_bad_uci() {
        assert_eq!(Move::from_uci("e2"), Err(ParseMoveError::WrongLength("e2".into())));
        assert!(matches!(
            Move::from_uci("e2e9"),
            Err(ParseMoveError::Position(ParsePositionError::OutOfRange(_)))
        ));
        assert_eq!(Move::from_uci("e7e8k"), Err(ParseMoveError::BadPromotion('k')));
    }

    #[test]
    fn serde_keeps_promotion() {
        let promo = Move::new(Position::new(7, 1), Position::new(8, 1), Some(PieceType::Knight));
        let json = serde_json::to_string(&promo).unwrap();
        assert_eq!(
            json,
            r#"{"start":{"row":7,"column":1},"end":{"row":8,"column":1},"promotion":"Knight"}"#
        );
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), promo);

        let quiet = Move::quiet(Position::new(2, 5), Position::new(4, 5));
        let json = serde_json::to_string(&quiet).unwrap();
        assert_eq!(
            json,
            r#"{"start":{"row":2,"column":5},"end":{"row":4,"column":5},"promotion":null}"#
        );
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), quiet);
    }

    #[test]
    fn equality_includes_promotion() {
        let a = Position::new(7, 3);
        let b = Position::new(8, 3);
        assert_ne!(Move::new(a, b, Some(PieceType::Queen)), Move::new(a, b, Some(PieceType::Rook)));
        assert_ne!(Move::quiet(a, b), Move::new(a, b, Some(PieceType::Queen)));
    }
}
