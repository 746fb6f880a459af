use crate::dom::{NodeId, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerType {
    Mouse,
    Pen,
    Touch,
}

/// Input events, as delivered by the host after hit-testing
///
/// `target` is the element the event originally happened on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Click {
        target: NodeId,
    },
    PointerDown {
        target: NodeId,
        pointer_id: i32,
        pointer_type: PointerType,
        button: i16,
        point: Point,
    },
    PointerMove {
        pointer_id: i32,
        point: Point,
    },
    PointerUp {
        pointer_id: i32,
        point: Point,
    },
    PointerCancel {
        pointer_id: i32,
    },
}

impl Event {
    /// Primary mouse button press
    pub fn mouse_down(target: NodeId, point: Point) -> Self {
        Self::PointerDown {
            target,
            pointer_id: 1,
            pointer_type: PointerType::Mouse,
            button: 0,
            point,
        }
    }

    pub fn mouse_move(point: Point) -> Self {
        Self::PointerMove {
            pointer_id: 1,
            point,
        }
    }

    pub fn mouse_up(point: Point) -> Self {
        Self::PointerUp {
            pointer_id: 1,
            point,
        }
    }
}
