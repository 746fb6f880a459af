use crate::controller::Command;
use crate::dom::{Document, NodeId, ACTION_ATTR};

/// The fixed page structure the board is rendered into
///
/// Mounted once; only the board and the debug panel are rebuilt by the
/// renderer. The overlay hosts drag ghosts above everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    pub toolbar: NodeId,
    pub board: NodeId,
    pub debug: NodeId,
    pub overlay: NodeId,
}

impl Shell {
    pub fn mount(doc: &mut Document) -> Self {
        let root = doc.root();

        let toolbar = doc.create_element("div");
        doc.add_class(toolbar, "toolbar");
        let add_column = doc.create_element("button");
        doc.set_text(add_column, "+ Column");
        doc.set_attr(add_column, ACTION_ATTR, Command::ADD_COLUMN);
        let reset = doc.create_element("button");
        doc.set_text(reset, "Reset");
        doc.set_attr(reset, ACTION_ATTR, Command::RESET);
        doc.append_child(toolbar, add_column);
        doc.append_child(toolbar, reset);

        let board = doc.create_element("div");
        doc.add_class(board, "board");
        doc.set_attr(board, "id", "board");

        let debug = doc.create_element("pre");
        doc.add_class(debug, "debug");
        doc.set_attr(debug, "id", "debug");

        let overlay = doc.create_element("div");
        doc.add_class(overlay, "drag-layer");
        doc.set_style(overlay, "position", "fixed");
        doc.set_style(overlay, "inset", "0");
        doc.set_style(overlay, "pointer-events", "none");

        for el in [toolbar, board, debug, overlay] {
            doc.append_child(root, el);
        }

        Self {
            toolbar,
            board,
            debug,
            overlay,
        }
    }

    /// Toolbar button for a command, if the shell has one
    pub fn control(&self, doc: &Document, action: &str) -> Option<NodeId> {
        doc.find_by_attr(self.toolbar, ACTION_ATTR, action)
    }
}
