use crate::config::BoardConfig;
use crate::controller::Command;
use crate::domain::{BoardState, Card, Column};
use crate::dom::{
    Document, NodeId, ACTION_ATTR, BOARD_COLUMN, CARD, CARD_ID_ATTR, COLUMN_BODY, COLUMN_HEAD,
    COLUMN_ID_ATTR, COLUMN_TITLE, SELECTED,
};
use crate::view::Shell;
use tracing::warn;

/// Rebuilds the board and debug panel from state
///
/// Every call destroys and recreates the whole board subtree, so it must not
/// run while a drag gesture holds references into it.
#[derive(Debug, Clone)]
pub struct Renderer {
    empty_selection_text: String,
}

impl Renderer {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            empty_selection_text: config.empty_selection_text.clone(),
        }
    }

    pub fn render(&self, doc: &mut Document, shell: &Shell, state: &BoardState) {
        doc.clear_children(shell.board);

        for column in &state.columns {
            let column_el = self.render_column(doc, state, column);
            doc.append_child(shell.board, column_el);
        }

        let debug = match state.selected_card() {
            Some(card) => serde_json::to_string_pretty(card).unwrap_or_else(|e| {
                warn!(card = %card.id, error = %e, "failed to serialize selected card");
                self.empty_selection_text.clone()
            }),
            None => self.empty_selection_text.clone(),
        };
        doc.set_text(shell.debug, &debug);
    }

    fn render_column(&self, doc: &mut Document, state: &BoardState, column: &Column) -> NodeId {
        let column_el = doc.create_element("div");
        doc.add_class(column_el, BOARD_COLUMN);
        doc.set_attr(column_el, COLUMN_ID_ATTR, column.id.as_str());

        let head = doc.create_element("div");
        doc.add_class(head, COLUMN_HEAD);

        let title = doc.create_element("div");
        doc.add_class(title, COLUMN_TITLE);
        doc.set_text(title, &column.title);

        let add_card = doc.create_element("button");
        doc.set_text(add_card, "+ Card");
        doc.set_attr(add_card, ACTION_ATTR, Command::ADD_CARD);

        doc.append_child(head, title);
        doc.append_child(head, add_card);

        let body = doc.create_element("div");
        doc.add_class(body, COLUMN_BODY);

        // Dangling ids are skipped, not repaired
        for card in column.card_ids.iter().filter_map(|id| state.card(id)) {
            let card_el = self.render_card(doc, state, card);
            doc.append_child(body, card_el);
        }

        doc.append_child(column_el, head);
        doc.append_child(column_el, body);
        column_el
    }

    fn render_card(&self, doc: &mut Document, state: &BoardState, card: &Card) -> NodeId {
        let card_el = doc.create_element("div");
        doc.add_class(card_el, CARD);
        doc.set_text(card_el, &card.title);
        doc.set_attr(card_el, CARD_ID_ATTR, card.id.as_str());

        if state.selected_card_id.as_ref() == Some(&card.id) {
            doc.add_class(card_el, SELECTED);
        }
        card_el
    }
}
