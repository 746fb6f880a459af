//! Input handling: translate document events into board actions.

pub mod commands;
pub mod drag;
pub mod event;
pub mod selection;

pub use commands::Command;
pub use drag::{DragController, DragOutcome, DragSession};
pub use event::{Event, PointerType};
pub use selection::{ClickOutcome, SelectionController};

use crate::dom::{Document, Layout};
use crate::view::Shell;

/// Swallows the one click the platform synthesizes after a pointer-up
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClickGuard {
    armed: bool,
}

impl ClickGuard {
    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns whether the guard was armed, disarming it
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}

/// Everything a controller may touch besides its own state
pub struct ViewContext<'a, L: Layout + ?Sized> {
    pub doc: &'a mut Document,
    pub layout: &'a L,
    pub shell: &'a Shell,
    pub guard: &'a mut ClickGuard,
}
