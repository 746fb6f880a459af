use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Opaque, globally unique identifier for a card (e.g., `c1`, `c-5f0c...`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Creates a fresh id from a random v4 UUID
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}{}", prefix, Uuid::new_v4()))
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(crate::error::BoardError::InvalidId(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
}

impl Card {
    pub fn new(id: CardId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_prefixed_and_distinct() {
        let a = CardId::generate("c-");
        let b = CardId::generate("c-");
        assert!(a.as_str().starts_with("c-"));
        assert_eq!(a.as_str().len(), "c-".len() + 36);
        assert_ne!(a, b);
    }

    #[test]
    fn test_card_id_parsing() {
        assert_eq!(CardId::from_str("c1").unwrap().as_str(), "c1");
        assert!(CardId::from_str("").is_err());
        assert!(CardId::from_str("   ").is_err());
    }

    #[test]
    fn test_card_json_shape() {
        let card = Card::new(CardId::from("c1"), "Render DOM from state");
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["id"], "c1");
        assert_eq!(value["title"], "Render DOM from state");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_card_equality_is_by_content() {
        let a = Card::new(CardId::from("c9"), "Same");
        let b: Card = serde_json::from_str(r#"{"id":"c9","title":"Same"}"#).unwrap();
        assert_eq!(a, b);
    }
}
