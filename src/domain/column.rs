use crate::domain::card::CardId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier for a column (e.g., `col-todo`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}{}", prefix, Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A column holding an ordered list of card references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub card_ids: Vec<CardId>,
}

impl Column {
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            card_ids: Vec::new(),
        }
    }

    pub fn with_cards(mut self, card_ids: impl IntoIterator<Item = CardId>) -> Self {
        self.card_ids.extend(card_ids);
        self
    }

    pub fn contains(&self, card_id: &CardId) -> bool {
        self.card_ids.contains(card_id)
    }

    /// Position of a card in this column
    pub fn index_of(&self, card_id: &CardId) -> Option<usize> {
        self.card_ids.iter().position(|id| id == card_id)
    }
}
