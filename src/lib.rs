//! # Hlavi Board
//!
//! Interactive kanban board core for Hlavi: columns holding ordered cards,
//! click-to-select, pointer drag-and-drop between columns, and persistence
//! of the whole board to a single storage slot.
//!
//! The browser itself is kept at arm's length. Rendering targets the
//! [`dom::Document`] element arena, geometry comes from a [`dom::Layout`]
//! implementation, and storage goes through the [`Storage`] trait, so a
//! host only has to translate its native events into [`controller::Event`]s
//! and mirror the document.

pub mod app;
pub mod config;
pub mod controller;
pub mod dom;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod storage;
pub mod view;

// Re-export commonly used types
pub use app::KanbanApp;
pub use config::BoardConfig;
pub use controller::{Event, PointerType};
pub use domain::{BoardAction, BoardState, Card, CardId, Column, ColumnId};
pub use error::{BoardError, Result};
pub use persistence::Persistence;
pub use storage::Storage;
