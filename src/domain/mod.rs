pub mod action;
pub mod board;
pub mod card;
pub mod column;

pub use action::BoardAction;
pub use board::BoardState;
pub use card::{Card, CardId};
pub use column::{Column, ColumnId};
