use crate::domain::{
    board::BoardState,
    card::{Card, CardId},
    column::{Column, ColumnId},
};
use crate::error::Result;

/// A state change produced by a controller
///
/// Controllers read the document and emit actions; only
/// [`BoardState::apply`] mutates the board.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    AddCard { column_id: ColumnId, card: Card },
    AddColumn(Column),
    Select(Option<CardId>),
    MoveCard {
        card_id: CardId,
        to_column: ColumnId,
        index: usize,
    },
}

impl BoardState {
    /// Applies an action, leaving the state untouched on error
    pub fn apply(&mut self, action: BoardAction) -> Result<()> {
        match action {
            BoardAction::AddCard { column_id, card } => {
                self.insert_card(&column_id, card)?;
            }
            BoardAction::AddColumn(column) => self.columns.push(column),
            BoardAction::Select(card_id) => self.set_selection(card_id),
            BoardAction::MoveCard {
                card_id,
                to_column,
                index,
            } => self.move_card(&card_id, &to_column, index)?,
        }
        Ok(())
    }
}
