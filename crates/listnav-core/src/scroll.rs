//! Scroll-into-view policy for the active element.

use crate::selection::{Hover, SelectionState};

/// Vertical placement of an element inside the scrollable content
pub trait ElementGeometry {
    fn offset_top(&self) -> i32;
    fn height(&self) -> i32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// The scrollable list container.
///
/// `scroll_to` is fire-and-forget; a new request supersedes one still
/// animating.
pub trait ScrollContainer {
    fn client_height(&self) -> i32;
    fn scroll_to(&mut self, top: i32, behavior: ScrollBehavior);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub index: usize,
    pub top: i32,
    pub behavior: ScrollBehavior,
}

/// Offset that puts the element's bottom edge on the container's bottom edge
pub fn bottom_anchored_offset(offset_top: i32, element_height: i32, container_height: i32) -> i32 {
    offset_top - container_height + element_height
}

/// Decides when the active element gets scrolled into view
#[derive(Debug, Clone, Default)]
pub struct ScrollSynchronizer {
    behavior: ScrollBehavior,
    last_index: Option<usize>,
}

impl ScrollSynchronizer {
    pub fn new(behavior: ScrollBehavior) -> Self {
        Self {
            behavior,
            last_index: None,
        }
    }

    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    /// Forget the last synced index so the next plan treats the selection as moved
    pub fn reset(&mut self) {
        self.last_index = None;
    }

    /// Scroll decision after a state change.
    ///
    /// `container_height` is `None` while no container is attached. Fires only
    /// when the active index moved (or a new element was resolved), the
    /// pointer is not the one that selected it, and the pointer has not left
    /// the container.
    pub fn plan<E: ElementGeometry>(
        &mut self,
        state: &SelectionState<E>,
        element_changed: bool,
        container_height: Option<i32>,
    ) -> Option<ScrollRequest> {
        let index = state.active_index();
        let moved = self.last_index != Some(index);
        self.last_index = Some(index);

        let container_height = container_height?;
        if state.is_empty() || !(moved || element_changed) {
            return None;
        }
        match state.hover() {
            Hover::Left => return None,
            Hover::Item(hovered) if hovered == index => return None,
            _ => {}
        }
        let element = state.active_element()?;

        Some(ScrollRequest {
            index,
            top: bottom_anchored_offset(element.offset_top(), element.height(), container_height),
            behavior: self.behavior,
        })
    }
}
