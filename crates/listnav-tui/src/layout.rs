//! Element tree of the rendered list.
//!
//! Rows are laid out in content coordinates (row `i` starts at `i * row_height`)
//! independent of the scroll position, the way a browser lays out a
//! scrollable list. The tree answers two questions: which row carries a given
//! index attribute value (`ElementLocator`), and which element sits under a
//! screen cell (`hit_test`).

use listnav_core::{ElementGeometry, ElementLocator, IndexTarget};
use ratatui::layout::Rect;

/// Width of the marker column in front of each label
pub const MARKER_WIDTH: u16 = 2;

/// A rendered row as seen by the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowElement {
    pub index: usize,
    pub top: u16,
    pub height: u16,
}

impl ElementGeometry for RowElement {
    fn offset_top(&self) -> i32 {
        i32::from(self.top)
    }

    fn height(&self) -> i32 {
        i32::from(self.height)
    }
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<usize>,
    /// Content coordinates: x from the body's left edge, y from the first row
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    attributes: Vec<(String, String)>,
    row: Option<usize>,
}

impl Node {
    fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListLayout {
    /// Parents always precede their children
    nodes: Vec<Node>,
    body: Rect,
    row_height: u16,
    scroll_top: u16,
}

impl ListLayout {
    /// Lay out `len` rows inside the list body
    pub fn build(len: usize, body: Rect, row_height: u16, attribute: &str) -> Self {
        let row_height = row_height.max(1);
        let content_height = (len as u64 * u64::from(row_height)).min(u64::from(u16::MAX)) as u16;
        let mut nodes = Vec::with_capacity(1 + len * 3);
        nodes.push(Node {
            parent: None,
            x: 0,
            y: 0,
            width: body.width,
            height: content_height.max(body.height),
            attributes: vec![("role".to_string(), "listbox".to_string())],
            row: None,
        });

        for index in 0..len {
            let top = index as u64 * u64::from(row_height);
            // Rows past the u16 coordinate space are not laid out
            if top + u64::from(row_height) > u64::from(u16::MAX) {
                break;
            }
            let top = top as u16;
            let row_id = nodes.len();
            nodes.push(Node {
                parent: Some(0),
                x: 0,
                y: top,
                width: body.width,
                height: row_height,
                attributes: vec![
                    ("role".to_string(), "option".to_string()),
                    (attribute.to_string(), index.to_string()),
                ],
                row: Some(index),
            });
            nodes.push(Node {
                parent: Some(row_id),
                x: 0,
                y: top,
                width: MARKER_WIDTH.min(body.width),
                height: 1,
                attributes: vec![("class".to_string(), "marker".to_string())],
                row: Some(index),
            });
            nodes.push(Node {
                parent: Some(row_id),
                x: MARKER_WIDTH,
                y: top,
                width: body.width.saturating_sub(MARKER_WIDTH),
                height: 1,
                attributes: vec![("class".to_string(), "label".to_string())],
                row: Some(index),
            });
        }

        Self {
            nodes,
            body,
            row_height,
            scroll_top: 0,
        }
    }

    pub fn body(&self) -> Rect {
        self.body
    }

    pub fn row_height(&self) -> u16 {
        self.row_height
    }

    pub fn row_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.parent == Some(0)).count()
    }

    /// Height of all rows together
    pub fn content_height(&self) -> u16 {
        (self.row_count() as u64 * u64::from(self.row_height)).min(u64::from(u16::MAX)) as u16
    }

    pub fn scroll_top(&self) -> u16 {
        self.scroll_top
    }

    pub fn set_scroll_top(&mut self, scroll_top: u16) {
        self.scroll_top = scroll_top;
    }

    /// Screen cell lies inside the list body
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.body.x
            && column < self.body.right()
            && row >= self.body.y
            && row < self.body.bottom()
    }

    /// Deepest element under a screen cell, `None` outside the body
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget<'_>> {
        if !self.contains(column, row) {
            return None;
        }
        let x = column - self.body.x;
        let y = (row - self.body.y).saturating_add(self.scroll_top);
        self.nodes
            .iter()
            .rposition(|node| node.contains(x, y))
            .map(|node| HitTarget { layout: self, node })
    }

    /// Rows intersecting the visible window, with their screen row
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, u16)> + '_ {
        let start = self.scroll_top;
        let end = start.saturating_add(self.body.height);
        self.nodes
            .iter()
            .filter(|n| n.parent == Some(0))
            .filter(move |n| n.y >= start && n.y < end)
            .filter_map(move |n| n.row.map(|index| (index, self.body.y + (n.y - start))))
    }

    fn element(&self, node: &Node) -> Option<RowElement> {
        node.row.map(|index| RowElement {
            index,
            top: node.y,
            height: node.height,
        })
    }
}

impl ElementLocator for ListLayout {
    type Element = RowElement;

    fn locate(&self, attribute: &str, index: usize) -> Option<RowElement> {
        let wanted = index.to_string();
        let mut matches = self
            .nodes
            .iter()
            .filter(|node| node.attribute(attribute) == Some(wanted.as_str()));
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        self.element(first)
    }
}

/// Element under the pointer
#[derive(Debug, Clone, Copy)]
pub struct HitTarget<'a> {
    layout: &'a ListLayout,
    node: usize,
}

impl<'a> HitTarget<'a> {
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        let layout: &'a ListLayout = self.layout;
        layout.nodes[self.node].attribute(name)
    }

    /// The target and its ancestors, innermost first
    fn ancestors(&self) -> impl Iterator<Item = &'a Node> + 'a {
        let layout: &'a ListLayout = self.layout;
        let nodes = &layout.nodes;
        std::iter::successors(Some(&nodes[self.node]), move |node| {
            node.parent.map(|id| &nodes[id])
        })
    }

    /// Owned copy of the ancestor chain, so the layout can be mutated afterwards
    pub fn detach(&self) -> PointerTarget {
        PointerTarget {
            chain: self.ancestors().map(|node| node.attributes.clone()).collect(),
        }
    }
}

impl IndexTarget for HitTarget<'_> {
    fn closest_attribute(&self, attribute: &str) -> Option<String> {
        self.ancestors()
            .find_map(|node| node.attribute(attribute))
            .map(str::to_string)
    }
}

/// Attributes of a hit element and its ancestors, innermost first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerTarget {
    chain: Vec<Vec<(String, String)>>,
}

impl IndexTarget for PointerTarget {
    fn closest_attribute(&self, attribute: &str) -> Option<String> {
        self.chain.iter().find_map(|attributes| {
            attributes
                .iter()
                .find(|(key, _)| key == attribute)
                .map(|(_, value)| value.clone())
        })
    }
}
