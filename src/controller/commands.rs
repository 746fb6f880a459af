use crate::config::BoardConfig;
use crate::domain::{BoardAction, Card, CardId, Column, ColumnId};
use crate::dom::{Document, NodeId, ACTION_ATTR, BOARD_COLUMN, COLUMN_ID_ATTR};

/// A control button press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddCard(ColumnId),
    AddColumn,
    Reset,
}

impl Command {
    pub const ADD_CARD: &'static str = "add-card";
    pub const ADD_COLUMN: &'static str = "add-column";
    pub const RESET: &'static str = "reset";

    /// Finds the control the click landed in, if any
    pub fn resolve(doc: &Document, target: NodeId) -> Option<Self> {
        let control = doc.closest_with_attr(target, ACTION_ATTR)?;
        match doc.attr(control, ACTION_ATTR)? {
            Self::ADD_CARD => {
                let column = doc.closest(control, BOARD_COLUMN)?;
                let id = doc.attr(column, COLUMN_ID_ATTR)?;
                Some(Self::AddCard(ColumnId::from(id)))
            }
            Self::ADD_COLUMN => Some(Self::AddColumn),
            Self::RESET => Some(Self::Reset),
            _ => None,
        }
    }

    /// The state change this command makes; reset is not a state change
    pub fn into_action(self, config: &BoardConfig) -> Option<BoardAction> {
        match self {
            Self::AddCard(column_id) => Some(BoardAction::AddCard {
                column_id,
                card: Card::new(
                    CardId::generate(&config.card_id_prefix),
                    config.new_card_title.clone(),
                ),
            }),
            Self::AddColumn => Some(BoardAction::AddColumn(Column::new(
                ColumnId::generate(&config.column_id_prefix),
                config.new_column_title.clone(),
            ))),
            Self::Reset => None,
        }
    }
}
