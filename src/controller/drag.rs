//! Pointer drag-and-drop of cards between and within columns.
//!
//! `Idle -> Dragging -> (Dropped | Cancelled) -> Idle`. While dragging, the
//! card element is the ghost: re-parented into the overlay, absolutely
//! positioned under the pointer and holding the pointer capture. A
//! placeholder of the same height marks where the card will land.

use crate::controller::{PointerType, ViewContext};
use crate::domain::{BoardAction, CardId, ColumnId};
use crate::dom::{
    Document, Layout, NodeId, Point, BOARD_COLUMN, CARD, CARD_ID_ATTR, COLUMN_BODY,
    COLUMN_ID_ATTR, DRAGGING, PLACEHOLDER,
};
use tracing::{debug, info};

/// Ghost styles, removed again when the card returns to its column
const GHOST_STYLES: [&str; 6] = ["position", "left", "top", "width", "height", "pointer-events"];

/// An active drag gesture
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub card_id: CardId,
    pub source_column: ColumnId,
    pub pointer_id: i32,
    pub ghost: NodeId,
    pub placeholder: NodeId,
    /// Pointer position relative to the card's corner at grab time
    pub grab_offset: Point,
    pub moved: bool,
    origin_body: NodeId,
    origin_index: usize,
}

#[derive(Debug, Default, Clone, PartialEq)]
enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    Ignored,
    Started,
    Moved,
    /// The card landed; the action records where
    Dropped(BoardAction),
    /// The card went back where it came from
    Cancelled,
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn pointer_down<L: Layout + ?Sized>(
        &mut self,
        ctx: &mut ViewContext<'_, L>,
        target: NodeId,
        pointer_id: i32,
        pointer_type: PointerType,
        button: i16,
        point: Point,
    ) -> DragOutcome {
        if let DragState::Dragging(session) = &self.state {
            debug!(pointer_id, active = session.pointer_id, "ignoring pointer down during drag");
            return DragOutcome::Ignored;
        }
        if pointer_type == PointerType::Mouse && button != 0 {
            return DragOutcome::Ignored;
        }

        let doc = &mut *ctx.doc;
        let Some(card_el) = doc.closest(target, CARD) else {
            return DragOutcome::Ignored;
        };
        let Some(body) = doc.parent(card_el).filter(|&p| doc.has_class(p, COLUMN_BODY)) else {
            return DragOutcome::Ignored;
        };
        let Some(card_id) = doc.attr(card_el, CARD_ID_ATTR).map(CardId::from) else {
            return DragOutcome::Ignored;
        };
        let Some(source_column) = doc
            .closest(body, BOARD_COLUMN)
            .and_then(|col| doc.attr(col, COLUMN_ID_ATTR))
            .map(ColumnId::from)
        else {
            return DragOutcome::Ignored;
        };
        let Some(rect) = ctx.layout.rect(doc, card_el) else {
            return DragOutcome::Ignored;
        };
        let origin_index = doc.index_in_parent(card_el).unwrap_or(0);

        let placeholder = doc.create_element("div");
        doc.add_class(placeholder, PLACEHOLDER);
        doc.set_style(placeholder, "height", &px(rect.height));
        doc.insert_before(body, placeholder, Some(card_el));

        let grab_offset = point - rect.origin();
        doc.append_child(ctx.shell.overlay, card_el);
        doc.add_class(card_el, DRAGGING);
        doc.set_style(card_el, "position", "absolute");
        doc.set_style(card_el, "width", &px(rect.width));
        doc.set_style(card_el, "height", &px(rect.height));
        doc.set_style(card_el, "pointer-events", "none");
        place_ghost(doc, card_el, point, grab_offset);
        doc.set_pointer_capture(card_el, pointer_id);

        debug!(card = %card_id, column = %source_column, pointer_id, "drag started");
        self.state = DragState::Dragging(DragSession {
            card_id,
            source_column,
            pointer_id,
            ghost: card_el,
            placeholder,
            grab_offset,
            moved: false,
            origin_body: body,
            origin_index,
        });
        DragOutcome::Started
    }

    pub fn pointer_move<L: Layout + ?Sized>(
        &mut self,
        ctx: &mut ViewContext<'_, L>,
        pointer_id: i32,
        point: Point,
    ) -> DragOutcome {
        let DragState::Dragging(session) = &mut self.state else {
            return DragOutcome::Ignored;
        };
        if session.pointer_id != pointer_id {
            return DragOutcome::Ignored;
        }

        session.moved = true;
        place_ghost(ctx.doc, session.ghost, point, session.grab_offset);

        if let Some(body) = body_at(ctx.doc, ctx.layout, point) {
            place_placeholder(ctx.doc, ctx.layout, body, session.placeholder, point.y);
        }
        DragOutcome::Moved
    }

    /// Ends the gesture: commits over a column body, reverts elsewhere
    pub fn pointer_up<L: Layout + ?Sized>(
        &mut self,
        ctx: &mut ViewContext<'_, L>,
        pointer_id: i32,
        point: Point,
    ) -> DragOutcome {
        let Some(session) = self.end(pointer_id) else {
            return DragOutcome::Ignored;
        };
        ctx.guard.arm();

        if body_at(ctx.doc, ctx.layout, point).is_none() {
            info!(card = %session.card_id, "dropped outside any column, reverting");
            revert(ctx.doc, &session);
            return DragOutcome::Cancelled;
        }

        let doc = &mut *ctx.doc;
        let target = doc.parent(session.placeholder).and_then(|body| {
            let column = doc.closest(body, BOARD_COLUMN)?;
            let id = doc.attr(column, COLUMN_ID_ATTR)?;
            Some((body, ColumnId::from(id)))
        });
        let Some((body, to_column)) = target else {
            revert(doc, &session);
            return DragOutcome::Cancelled;
        };
        let index = doc.index_in_parent(session.placeholder).unwrap_or(0);

        restore_card(doc, &session);
        doc.insert_before(body, session.ghost, Some(session.placeholder));
        doc.remove(session.placeholder);

        info!(
            card = %session.card_id,
            from = %session.source_column,
            to = %to_column,
            index,
            moved = session.moved,
            "card dropped"
        );
        DragOutcome::Dropped(BoardAction::MoveCard {
            card_id: session.card_id,
            to_column,
            index,
        })
    }

    /// Platform-initiated cancel: revert without touching state
    pub fn pointer_cancel<L: Layout + ?Sized>(
        &mut self,
        ctx: &mut ViewContext<'_, L>,
        pointer_id: i32,
    ) -> DragOutcome {
        let Some(session) = self.end(pointer_id) else {
            return DragOutcome::Ignored;
        };
        ctx.guard.arm();

        info!(card = %session.card_id, "drag cancelled");
        revert(ctx.doc, &session);
        DragOutcome::Cancelled
    }

    /// Drops any active gesture without arming the click guard
    pub fn abort(&mut self, doc: &mut Document) {
        if let DragState::Dragging(session) = std::mem::take(&mut self.state) {
            debug!(card = %session.card_id, "drag aborted");
            revert(doc, &session);
        }
    }

    /// Leaves `Dragging` if the pointer owns the gesture
    fn end(&mut self, pointer_id: i32) -> Option<DragSession> {
        match &self.state {
            DragState::Dragging(session) if session.pointer_id == pointer_id => {}
            _ => return None,
        }
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

fn place_ghost(doc: &mut Document, ghost: NodeId, point: Point, grab_offset: Point) {
    let corner = point - grab_offset;
    doc.set_style(ghost, "left", &px(corner.x));
    doc.set_style(ghost, "top", &px(corner.y));
}

fn body_at<L: Layout + ?Sized>(doc: &Document, layout: &L, point: Point) -> Option<NodeId> {
    layout
        .element_at(doc, point)
        .and_then(|hit| doc.closest(hit, COLUMN_BODY))
}

/// Puts the placeholder before the first card whose midpoint is below `y`
fn place_placeholder<L: Layout + ?Sized>(
    doc: &mut Document,
    layout: &L,
    body: NodeId,
    placeholder: NodeId,
    y: f64,
) {
    let before = doc
        .children(body)
        .iter()
        .copied()
        .filter(|&c| c != placeholder && doc.has_class(c, CARD))
        .find(|&c| layout.rect(doc, c).is_some_and(|r| y < r.mid_y()));
    doc.insert_before(body, placeholder, before);
}

fn restore_card(doc: &mut Document, session: &DragSession) {
    doc.release_pointer_capture(session.ghost, session.pointer_id);
    doc.remove_class(session.ghost, DRAGGING);
    for property in GHOST_STYLES {
        doc.remove_style(session.ghost, property);
    }
}

fn revert(doc: &mut Document, session: &DragSession) {
    doc.remove(session.placeholder);
    restore_card(doc, session);
    if doc.contains(session.origin_body) {
        doc.insert_at(session.origin_body, session.ghost, session.origin_index);
    } else {
        doc.remove(session.ghost);
    }
}
