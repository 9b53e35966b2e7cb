//! Selection state for a one-dimensional list.
//!
//! `SelectionState` holds the active index, the pointer hover and the last
//! element resolved for the active index. Every setter reports whether it
//! changed anything so hosts can decide when to re-render.

mod locator;
mod state;

pub use locator::ElementLocator;
pub use state::SelectionState;

/// Where the pointer currently is relative to the list.
///
/// Integer encoding used in logs and the status bar: `Item(k)` is `k`,
/// `None` is `-1`, `Left` is `-2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hover {
    /// No pointer-driven hover; the keyboard is authoritative
    #[default]
    None,
    /// Pointer is over the item at this index
    Item(usize),
    /// Pointer has left the navigable container
    Left,
}

impl Hover {
    /// Hovered index, if the pointer is over an item
    pub fn index(self) -> Option<usize> {
        match self {
            Hover::Item(index) => Some(index),
            Hover::None | Hover::Left => None,
        }
    }

    /// The pointer decides the base of the next keyboard transition
    pub fn is_pointer_authoritative(self) -> bool {
        matches!(self, Hover::Item(_))
    }

    pub fn is_left(self) -> bool {
        self == Hover::Left
    }

    pub fn raw(self) -> i64 {
        match self {
            Hover::Item(index) => index as i64,
            Hover::None => -1,
            Hover::Left => -2,
        }
    }
}

impl std::fmt::Display for Hover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_encoding() {
        assert_eq!(Hover::default(), Hover::None);
        assert_eq!(Hover::None.raw(), -1);
        assert_eq!(Hover::Left.raw(), -2);
        assert_eq!(Hover::Item(4).raw(), 4);
        assert_eq!(Hover::Left.to_string(), "-2");
    }

    #[test]
    fn test_only_items_carry_pointer_authority() {
        assert!(Hover::Item(0).is_pointer_authoritative());
        assert!(!Hover::None.is_pointer_authoritative());
        assert!(!Hover::Left.is_pointer_authoritative());
        assert_eq!(Hover::Left.index(), None);
    }
}
