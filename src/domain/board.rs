use crate::domain::{
    card::{Card, CardId},
    column::{Column, ColumnId},
};
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Kanban board state
///
/// Columns reference cards by id; the cards themselves live in `cards`.
/// A card id appears in at most one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub columns: Vec<Column>,
    pub cards: BTreeMap<CardId, Card>,
    #[serde(default)]
    pub selected_card_id: Option<CardId>,
}

impl BoardState {
    /// Creates an empty board with the given columns
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            cards: BTreeMap::new(),
            selected_card_id: None,
        }
    }

    /// The hard-coded board used when nothing has been saved yet
    pub fn seed() -> Self {
        let c1 = Card::new(CardId::from("c1"), "Render DOM from state");
        let c2 = Card::new(CardId::from("c2"), "Click a card to select it");

        let mut state = Self::new(vec![
            Column::new(ColumnId::from("col-todo"), "Todo")
                .with_cards([c1.id.clone(), c2.id.clone()]),
            Column::new(ColumnId::from("col-doing"), "Doing"),
            Column::new(ColumnId::from("col-done"), "Done"),
        ]);
        state.cards.insert(c1.id.clone(), c1);
        state.cards.insert(c2.id.clone(), c2);
        state
    }

    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == id)
    }

    fn find_column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|col| &col.id == id)
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Column currently holding the card, with the card's index in it
    pub fn placement_of(&self, card_id: &CardId) -> Option<(&Column, usize)> {
        self.columns
            .iter()
            .find_map(|col| col.index_of(card_id).map(|index| (col, index)))
    }

    /// Resolves the selection; a stale id behaves as no selection
    pub fn selected_card(&self) -> Option<&Card> {
        self.selected_card_id
            .as_ref()
            .and_then(|id| self.cards.get(id))
    }

    pub fn set_selection(&mut self, card_id: Option<CardId>) {
        self.selected_card_id = card_id;
    }

    /// Creates a card with a fresh `id_prefix`ed id at the end of the column
    pub fn add_card(
        &mut self,
        column_id: &ColumnId,
        title: impl Into<String>,
        id_prefix: &str,
    ) -> Result<CardId> {
        let card = Card::new(CardId::generate(id_prefix), title);
        self.insert_card(column_id, card)
    }

    /// Appends an already constructed card to the column
    pub fn insert_card(&mut self, column_id: &ColumnId, card: Card) -> Result<CardId> {
        if self.cards.contains_key(&card.id) {
            return Err(BoardError::InvalidId(format!(
                "card {} already exists",
                card.id
            )));
        }

        let column = self
            .find_column_mut(column_id)
            .ok_or_else(|| BoardError::ColumnNotFound(column_id.to_string()))?;
        column.card_ids.push(card.id.clone());

        let id = card.id.clone();
        self.cards.insert(id.clone(), card);
        Ok(id)
    }

    /// Appends an empty column with a fresh `id_prefix`ed id
    pub fn add_column(&mut self, title: impl Into<String>, id_prefix: &str) -> ColumnId {
        let column = Column::new(ColumnId::generate(id_prefix), title);
        let id = column.id.clone();
        self.columns.push(column);
        id
    }

    /// Moves a card into `to_column` at `index`
    ///
    /// The index is taken relative to the target column with the card
    /// already removed, and is clamped to the column length.
    pub fn move_card(&mut self, card_id: &CardId, to_column: &ColumnId, index: usize) -> Result<()> {
        if !self.cards.contains_key(card_id) {
            return Err(BoardError::CardNotFound(card_id.to_string()));
        }
        if self.find_column(to_column).is_none() {
            return Err(BoardError::ColumnNotFound(to_column.to_string()));
        }

        for column in &mut self.columns {
            column.card_ids.retain(|id| id != card_id);
        }

        let column = self
            .find_column_mut(to_column)
            .ok_or_else(|| BoardError::ColumnNotFound(to_column.to_string()))?;
        let index = index.min(column.card_ids.len());
        column.card_ids.insert(index, card_id.clone());
        Ok(())
    }

    /// Checks that no card id is referenced twice across the board
    pub fn card_ids_unique(&self) -> bool {
        let mut seen = HashSet::new();
        self.columns
            .iter()
            .flat_map(|col| col.card_ids.iter())
            .all(|id| seen.insert(id))
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(state: &BoardState, column: &str) -> Vec<String> {
        state
            .find_column(&ColumnId::from(column))
            .unwrap()
            .card_ids
            .iter()
            .map(|id| id.to_string())
            .collect()
    }

    #[test]
    fn test_seed_board() {
        let state = BoardState::seed();
        assert_eq!(state.columns.len(), 3);
        assert_eq!(ids(&state, "col-todo"), vec!["c1", "c2"]);
        assert!(ids(&state, "col-doing").is_empty());
        assert_eq!(state.selected_card_id, None);
        assert!(state.card_ids_unique());
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(BoardState::seed(), BoardState::seed());
        assert_eq!(BoardState::default(), BoardState::seed());
    }

    #[test]
    fn test_add_card_appends_to_column() {
        let mut state = BoardState::seed();
        let id = state
            .add_card(&ColumnId::from("col-todo"), "New Task", "task-")
            .unwrap();

        assert_eq!(ids(&state, "col-todo").last().unwrap(), id.as_str());
        assert_eq!(state.card(&id).unwrap().title, "New Task");
        assert!(id.as_str().starts_with("task-"));
    }

    #[test]
    fn test_add_card_to_unknown_column_creates_nothing() {
        let mut state = BoardState::seed();
        let before = state.clone();

        let err = state
            .add_card(&ColumnId::from("col-missing"), "Lost", "c-")
            .unwrap_err();
        assert!(matches!(err, BoardError::ColumnNotFound(_)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_insert_duplicate_card_rejected() {
        let mut state = BoardState::seed();
        let dup = Card::new(CardId::from("c1"), "Again");
        assert!(state.insert_card(&ColumnId::from("col-done"), dup).is_err());
        assert!(ids(&state, "col-done").is_empty());
    }

    #[test]
    fn test_stale_selection_resolves_to_none() {
        let mut state = BoardState::seed();
        state.set_selection(Some(CardId::from("ghost")));
        assert!(state.selected_card().is_none());

        state.set_selection(Some(CardId::from("c2")));
        assert_eq!(state.selected_card().unwrap().id.as_str(), "c2");
    }

    #[test]
    fn test_move_card_across_columns() {
        let mut state = BoardState::seed();
        state
            .move_card(&CardId::from("c1"), &ColumnId::from("col-doing"), 0)
            .unwrap();

        assert_eq!(ids(&state, "col-todo"), vec!["c2"]);
        assert_eq!(ids(&state, "col-doing"), vec!["c1"]);
        assert!(state.card_ids_unique());
    }

    #[test]
    fn test_move_card_within_column() {
        let mut state = BoardState::seed();
        state
            .move_card(&CardId::from("c1"), &ColumnId::from("col-todo"), 1)
            .unwrap();
        assert_eq!(ids(&state, "col-todo"), vec!["c2", "c1"]);
    }

    #[test]
    fn test_move_card_clamps_index() {
        let mut state = BoardState::seed();
        state
            .move_card(&CardId::from("c1"), &ColumnId::from("col-done"), 42)
            .unwrap();
        assert_eq!(ids(&state, "col-done"), vec!["c1"]);
    }

    #[test]
    fn test_move_unknown_card_or_column_fails() {
        let mut state = BoardState::seed();
        assert!(state
            .move_card(&CardId::from("nope"), &ColumnId::from("col-done"), 0)
            .is_err());
        assert!(state
            .move_card(&CardId::from("c1"), &ColumnId::from("col-nope"), 0)
            .is_err());
        assert_eq!(ids(&state, "col-todo"), vec!["c1", "c2"]);
    }

    #[test]
    fn test_placement_of() {
        let state = BoardState::seed();
        let (column, index) = state.placement_of(&CardId::from("c2")).unwrap();
        assert_eq!(column.id.as_str(), "col-todo");
        assert_eq!(index, 1);
        assert!(state.placement_of(&CardId::from("c9")).is_none());
    }

    #[test]
    fn test_add_column() {
        let mut state = BoardState::seed();
        let id = state.add_column("Blocked", "lane-");
        assert_eq!(state.columns.last().unwrap().id, id);
        assert!(id.as_str().starts_with("lane-"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut state = BoardState::seed();
        state
            .add_card(&ColumnId::from("col-doing"), "New Task", "c-")
            .unwrap();
        state.set_selection(Some(CardId::from("c2")));

        let json = serde_json::to_string(&state).unwrap();
        let loaded: BoardState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_duplicate_card_keys_last_write_wins() {
        let json = r#"{
            "columns": [{"id": "col-todo", "title": "Todo", "cardIds": ["c1"]}],
            "cards": {
                "c1": {"id": "c1", "title": "first"},
                "c1": {"id": "c1", "title": "second"}
            },
            "selectedCardId": null
        }"#;
        let state: BoardState = serde_json::from_str(json).unwrap();
        assert_eq!(state.card(&CardId::from("c1")).unwrap().title, "second");
    }
}
