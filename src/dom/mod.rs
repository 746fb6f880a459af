//! Element tree, geometry and the naming contract shared by the renderer
//! and the controllers that read its output back.

pub mod document;
pub mod layout;

pub use document::{Document, NodeId, PointerCapture};
pub use layout::{Layout, LayoutMetrics, Point, Rect, StackLayout};

pub const BOARD_COLUMN: &str = "column";
pub const COLUMN_HEAD: &str = "column__head";
pub const COLUMN_TITLE: &str = "column__title";
pub const COLUMN_BODY: &str = "column__body";
pub const CARD: &str = "card";
pub const SELECTED: &str = "is-selected";
pub const DRAGGING: &str = "is-dragging";
pub const PLACEHOLDER: &str = "placeholder";

/// Column elements carry their column id here
pub const COLUMN_ID_ATTR: &str = "data-col-id";
/// Card elements carry their card id here
pub const CARD_ID_ATTR: &str = "data-card-id";
/// Control buttons name their command here
pub const ACTION_ATTR: &str = "data-action";
