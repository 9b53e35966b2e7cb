use crate::selection::{Hover, SelectionState};

/// Hit-testing view of a pointer event target.
pub trait IndexTarget {
    /// Value of `attribute` on the target itself or its nearest ancestor
    /// that carries it. Presence is what counts, not the value.
    fn closest_attribute(&self, attribute: &str) -> Option<String>;
}

impl<T: IndexTarget + ?Sized> IndexTarget for &T {
    fn closest_attribute(&self, attribute: &str) -> Option<String> {
        (**self).closest_attribute(attribute)
    }
}

/// Parse an index attribute value; anything but a non-negative integer is rejected
pub fn parse_index(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

/// Pointer moved over `target`.
///
/// Makes the hovered item both hovered and active. Moving within the same
/// item leaves the state untouched. Returns true when anything changed.
pub fn handle_move<E, T>(state: &mut SelectionState<E>, attribute: &str, target: &T) -> bool
where
    T: IndexTarget + ?Sized,
{
    let Some(value) = target.closest_attribute(attribute) else {
        return false;
    };
    let Some(index) = parse_index(&value) else {
        return false;
    };
    if state.hover() == Hover::Item(index) {
        return false;
    }
    state.set_hover(Hover::Item(index));
    state.set_active_index(index);
    true
}

/// Pointer left the navigable container
pub fn handle_leave<E>(state: &mut SelectionState<E>) -> bool {
    state.set_hover(Hover::Left)
}
