use super::{ElementLocator, Hover};

/// Selection state owned by a single list component.
#[derive(Debug, Clone)]
pub struct SelectionState<E> {
    length: usize,
    active_index: usize,
    hover: Hover,
    active_element: Option<E>,
}

impl<E> SelectionState<E> {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            active_index: 0,
            hover: Hover::None,
            active_element: None,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn hover(&self) -> Hover {
        self.hover
    }

    pub fn active_element(&self) -> Option<&E> {
        self.active_element.as_ref()
    }

    /// Set the active index without bounds checking.
    ///
    /// Callers must pass an index below `length()`; out-of-range values are
    /// stored as given.
    pub fn set_active_index(&mut self, index: usize) -> bool {
        if self.active_index == index {
            return false;
        }
        self.active_index = index;
        true
    }

    pub fn set_hover(&mut self, hover: Hover) -> bool {
        if self.hover == hover {
            return false;
        }
        self.hover = hover;
        true
    }

    /// Store a new list length; any change resets the active index to 0.
    pub fn on_length_change(&mut self, length: usize) -> bool {
        if self.length == length {
            return false;
        }
        self.length = length;
        self.active_index = 0;
        true
    }
}

impl<E: PartialEq> SelectionState<E> {
    /// Look up the element for the active index.
    ///
    /// A locator miss keeps the last resolved element. Returns true when a
    /// different element was stored.
    pub fn resolve_active_element<L>(&mut self, locator: &L, attribute: &str) -> bool
    where
        L: ElementLocator<Element = E> + ?Sized,
    {
        if self.length == 0 {
            return false;
        }
        match locator.locate(attribute, self.active_index) {
            Some(element) if self.active_element.as_ref() != Some(&element) => {
                self.active_element = Some(element);
                true
            }
            _ => false,
        }
    }
}
