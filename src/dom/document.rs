use slotmap::{new_key_type, SlotMap};
use std::collections::BTreeMap;
use std::fmt::Write as _;

new_key_type! {
    /// Handle to an element in a [`Document`]
    ///
    /// A handle to a removed element never aliases one created later.
    pub struct NodeId;
}

#[derive(Debug)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            style: BTreeMap::new(),
            text: None,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Which pointer currently owns an element's pointer events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerCapture {
    pub node: NodeId,
    pub pointer_id: i32,
}

/// An owned element tree standing in for the browser DOM
///
/// Only the parts the board needs are modelled: tags, classes, attributes,
/// inline style, text content, tree structure and pointer capture.
#[derive(Debug)]
pub struct Document {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    capture: Option<PointerCapture>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document holding only a `body` root element
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new("body"));
        Self {
            nodes,
            root,
            capture: None,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live elements, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.insert(Node::new(tag))
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.tag.as_str())
    }

    // --- Classes, attributes, style, text ---

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.node_mut(id) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.node_mut(id) {
            node.classes.retain(|c| c != class);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id)
            .map(|n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(node) = self.node_mut(id) {
            node.attrs.insert(name.to_string(), value.to_string());
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)
            .and_then(|n| n.attrs.get(name))
            .map(String::as_str)
    }

    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(node) = self.node_mut(id) {
            node.style.insert(property.to_string(), value.to_string());
        }
    }

    pub fn remove_style(&mut self, id: NodeId, property: &str) {
        if let Some(node) = self.node_mut(id) {
            node.style.remove(property);
        }
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.node(id)
            .and_then(|n| n.style.get(property))
            .map(String::as_str)
    }

    /// Reads a `px` style value as a number
    pub fn style_px(&self, id: NodeId, property: &str) -> Option<f64> {
        self.style(id, property)
            .and_then(|v| v.strip_suffix("px"))
            .and_then(|v| v.parse().ok())
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if let Some(node) = self.node_mut(id) {
            node.text = Some(text.to_string());
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| n.text.as_deref())
    }

    // --- Tree structure ---

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Takes the element out of its parent, keeping its subtree alive
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.children.retain(|&c| c != id);
        }
        if let Some(node) = self.node_mut(id) {
            node.parent = None;
        }
    }

    /// Inserts `child` into `parent` before `reference`, or at the end
    ///
    /// The child is moved if it already has a parent. Inserting an element
    /// into its own subtree is ignored.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) {
        if !self.contains(parent) || !self.contains(child) {
            return;
        }
        if self.is_inclusive_ancestor(child, parent) {
            return;
        }

        self.detach(child);
        let Some(parent_node) = self.node_mut(parent) else {
            return;
        };
        let index = reference
            .and_then(|r| parent_node.children.iter().position(|&c| c == r))
            .unwrap_or(parent_node.children.len());
        parent_node.children.insert(index, child);

        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.insert_before(parent, child, None);
    }

    /// Inserts `child` at `index` among the parent's children (clamped)
    pub fn insert_at(&mut self, parent: NodeId, child: NodeId, index: usize) {
        self.detach(child);
        let reference = self.children(parent).get(index).copied();
        self.insert_before(parent, child, reference);
    }

    /// Detaches and destroys the element and its subtree
    pub fn remove(&mut self, id: NodeId) {
        if !self.contains(id) || id == self.root {
            return;
        }
        self.detach(id);

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                stack.extend(node.children);
            }
            if self.capture.map(|c| c.node) == Some(current) {
                self.capture = None;
            }
        }
    }

    /// Destroys every child of the element (`innerHTML = ""`)
    pub fn clear_children(&mut self, id: NodeId) {
        let children = self.children(id).to_vec();
        for child in children {
            self.remove(child);
        }
    }

    // --- Queries ---

    /// Nearest inclusive ancestor carrying `class`
    pub fn closest(&self, id: NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.has_class(node, class) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    /// Nearest inclusive ancestor carrying attribute `name`
    pub fn closest_with_attr(&self, id: NodeId, name: &str) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.attr(node, name).is_some() {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    /// Descendants of `scope` (inclusive) in document order
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![scope];
        while let Some(node) = stack.pop() {
            if !self.contains(node) {
                continue;
            }
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    pub fn find_by_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    pub fn find_by_attr(&self, scope: NodeId, name: &str, value: &str) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|&n| self.attr(n, name) == Some(value))
    }

    // --- Pointer capture ---

    pub fn set_pointer_capture(&mut self, id: NodeId, pointer_id: i32) {
        if self.contains(id) {
            self.capture = Some(PointerCapture {
                node: id,
                pointer_id,
            });
        }
    }

    pub fn release_pointer_capture(&mut self, id: NodeId, pointer_id: i32) {
        if self.capture
            == Some(PointerCapture {
                node: id,
                pointer_id,
            })
        {
            self.capture = None;
        }
    }

    pub fn pointer_capture(&self) -> Option<PointerCapture> {
        self.capture
    }

    /// Serializes the subtree as HTML, for inspection and comparison
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };

        let _ = write!(out, "<{}", node.tag);
        if !node.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&node.classes.join(" ")));
        }
        for (name, value) in &node.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if !node.style.is_empty() {
            let style: Vec<String> = node
                .style
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect();
            let _ = write!(out, " style=\"{}\"", escape(&style.join("; ")));
        }
        out.push('>');

        if let Some(text) = &node.text {
            out.push_str(&escape(text));
        }
        for &child in &node.children {
            self.write_html(child, out);
        }
        let _ = write!(out, "</{}>", node.tag);
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
