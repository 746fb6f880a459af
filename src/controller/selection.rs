use crate::controller::{ClickGuard, Command};
use crate::domain::{BoardAction, CardId};
use crate::dom::{Document, NodeId, CARD, CARD_ID_ATTR};
use tracing::debug;

/// What a click amounts to
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// The click that trails a finished drag
    Suppressed,
    Command(Command),
    Select(BoardAction),
    Ignored,
}

/// Routes clicks to controls or card selection
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionController;

impl SelectionController {
    pub fn on_click(&self, doc: &Document, target: NodeId, guard: &mut ClickGuard) -> ClickOutcome {
        if guard.take() {
            debug!("suppressed click following a drag");
            return ClickOutcome::Suppressed;
        }

        if let Some(command) = Command::resolve(doc, target) {
            return ClickOutcome::Command(command);
        }

        let Some(card_id) = doc
            .closest(target, CARD)
            .and_then(|card| doc.attr(card, CARD_ID_ATTR))
        else {
            return ClickOutcome::Ignored;
        };

        ClickOutcome::Select(BoardAction::Select(Some(CardId::from(card_id))))
    }
}
