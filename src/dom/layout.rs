use crate::dom::{
    document::{Document, NodeId},
    BOARD_COLUMN, COLUMN_BODY, COLUMN_HEAD,
};
use serde::{Deserialize, Serialize};
use std::ops::Sub;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// Geometry and hit-testing for a rendered document
///
/// In a browser this is `getBoundingClientRect` and `elementFromPoint`;
/// elements styled `pointer-events: none` are invisible to hit-testing.
pub trait Layout {
    /// Bounding box of the element, if it is laid out
    fn rect(&self, doc: &Document, node: NodeId) -> Option<Rect>;

    /// Topmost hit-testable element under the point
    fn element_at(&self, doc: &Document, point: Point) -> Option<NodeId>;
}

/// Sizes used by [`StackLayout`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutMetrics {
    pub origin: Point,
    pub column_width: f64,
    pub column_gap: f64,
    pub head_height: f64,
    pub body_padding: f64,
    pub card_height: f64,
    pub card_gap: f64,
    pub min_body_height: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            origin: Point::default(),
            column_width: 220.0,
            column_gap: 16.0,
            head_height: 40.0,
            body_padding: 8.0,
            card_height: 48.0,
            card_gap: 8.0,
            min_body_height: 96.0,
        }
    }
}

/// Deterministic layout: columns side by side, cards stacked in each body
///
/// Body children take their `height` style when set, otherwise the card
/// height. Absolutely positioned elements use their `left`/`top` styles.
#[derive(Debug, Clone, Default)]
pub struct StackLayout {
    metrics: LayoutMetrics,
}

impl StackLayout {
    pub fn new(metrics: LayoutMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Every laid-out box in paint order
    fn boxes(&self, doc: &Document) -> Vec<(NodeId, Rect)> {
        let m = &self.metrics;
        let mut boxes = Vec::new();

        for (i, column) in doc.find_by_class(doc.root(), BOARD_COLUMN).into_iter().enumerate() {
            let x = m.origin.x + i as f64 * (m.column_width + m.column_gap);
            let y = m.origin.y;
            let children = doc.children(column);
            let head = children.iter().copied().find(|&c| doc.has_class(c, COLUMN_HEAD));
            let body = children.iter().copied().find(|&c| doc.has_class(c, COLUMN_BODY));

            let body_top = y + m.head_height;
            let mut inner = Vec::new();
            let mut cursor = body_top + m.body_padding;
            if let Some(body) = body {
                for &child in doc.children(body) {
                    let height = doc.style_px(child, "height").unwrap_or(m.card_height);
                    let rect = Rect::new(
                        x + m.body_padding,
                        cursor,
                        m.column_width - 2.0 * m.body_padding,
                        height,
                    );
                    inner.push((child, rect));
                    cursor += height + m.card_gap;
                }
            }
            let body_height = (cursor - body_top + m.body_padding).max(m.min_body_height);

            boxes.push((
                column,
                Rect::new(x, y, m.column_width, m.head_height + body_height),
            ));
            if let Some(head) = head {
                boxes.push((head, Rect::new(x, y, m.column_width, m.head_height)));
                let parts = doc.children(head);
                let share = m.column_width / parts.len().max(1) as f64;
                for (j, &part) in parts.iter().enumerate() {
                    boxes.push((part, Rect::new(x + j as f64 * share, y, share, m.head_height)));
                }
            }
            if let Some(body) = body {
                boxes.push((body, Rect::new(x, body_top, m.column_width, body_height)));
            }
            boxes.extend(inner);
        }

        for node in doc.descendants(doc.root()) {
            if let Some(rect) = self.absolute_rect(doc, node) {
                boxes.push((node, rect));
            }
        }
        boxes
    }

    fn absolute_rect(&self, doc: &Document, node: NodeId) -> Option<Rect> {
        if doc.style(node, "position") != Some("absolute") {
            return None;
        }
        Some(Rect::new(
            doc.style_px(node, "left")?,
            doc.style_px(node, "top")?,
            doc.style_px(node, "width").unwrap_or(self.metrics.column_width),
            doc.style_px(node, "height").unwrap_or(self.metrics.card_height),
        ))
    }

    fn hit_testable(doc: &Document, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if doc.style(n, "pointer-events") == Some("none") {
                return false;
            }
            current = doc.parent(n);
        }
        true
    }
}

impl Layout for StackLayout {
    fn rect(&self, doc: &Document, node: NodeId) -> Option<Rect> {
        self.boxes(doc)
            .into_iter()
            .rev()
            .find(|(n, _)| *n == node)
            .map(|(_, rect)| rect)
    }

    fn element_at(&self, doc: &Document, point: Point) -> Option<NodeId> {
        self.boxes(doc)
            .into_iter()
            .rev()
            .find(|(n, rect)| rect.contains(point) && Self::hit_testable(doc, *n))
            .map(|(n, _)| n)
    }
}
