//! `ListNavigator`: the handle a list component holds.
//!
//! It owns the selection state, the element locator and (once attached) the
//! scroll container. Every mutating entry point finishes with `reconcile`,
//! which re-resolves the active element and issues at most one scroll
//! request.

use tracing::debug;

use crate::config::KeyBindingOptions;
use crate::navigation::{self, IndexTarget, KeyOutcome, NavKey};
use crate::scroll::{ElementGeometry, ScrollBehavior, ScrollContainer, ScrollRequest, ScrollSynchronizer};
use crate::selection::{ElementLocator, Hover, SelectionState};

/// What a reconcile pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reconciled {
    /// A different element was resolved for the active index
    pub element_changed: bool,
    /// Scroll request sent to the container
    pub scroll: Option<ScrollRequest>,
}

pub struct ListNavigator<L, C>
where
    L: ElementLocator,
{
    state: SelectionState<L::Element>,
    attribute: String,
    options: KeyBindingOptions,
    locator: L,
    container: Option<C>,
    scroller: ScrollSynchronizer,
}

impl<L, C> ListNavigator<L, C>
where
    L: ElementLocator,
    L::Element: ElementGeometry + PartialEq,
    C: ScrollContainer,
{
    pub fn new(
        length: usize,
        index_attribute: impl Into<String>,
        options: KeyBindingOptions,
        locator: L,
    ) -> Self {
        let mut navigator = Self {
            state: SelectionState::new(length),
            attribute: index_attribute.into(),
            options,
            locator,
            container: None,
            scroller: ScrollSynchronizer::new(ScrollBehavior::Smooth),
        };
        navigator.reconcile();
        navigator
    }

    /// Use a different behavior for future scroll requests
    pub fn with_scroll_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.scroller = ScrollSynchronizer::new(behavior);
        self
    }

    pub fn state(&self) -> &SelectionState<L::Element> {
        &self.state
    }

    pub fn length(&self) -> usize {
        self.state.length()
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    pub fn active_element(&self) -> Option<&L::Element> {
        self.state.active_element()
    }

    pub fn hover(&self) -> Hover {
        self.state.hover()
    }

    pub fn index_attribute(&self) -> &str {
        &self.attribute
    }

    /// Options for the key binding service delivering keys to this list
    pub fn binding_options(&self) -> &KeyBindingOptions {
        &self.options
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Mutable access for hosts that relayout; call `reconcile` afterwards
    pub fn locator_mut(&mut self) -> &mut L {
        &mut self.locator
    }

    pub fn container(&self) -> Option<&C> {
        self.container.as_ref()
    }

    pub fn container_mut(&mut self) -> Option<&mut C> {
        self.container.as_mut()
    }

    /// Attach the scrollable element. The current selection is synced into view.
    pub fn attach_container(&mut self, container: C) -> Reconciled {
        self.container = Some(container);
        self.scroller.reset();
        self.reconcile()
    }

    pub fn detach_container(&mut self) -> Option<C> {
        self.container.take()
    }

    /// Select `index` directly.
    ///
    /// The index is not checked against `length()`; passing one outside the
    /// list is a caller bug.
    pub fn set_active_index(&mut self, index: usize) -> Reconciled {
        self.state.set_active_index(index);
        self.reconcile()
    }

    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        let outcome = navigation::apply_key(&mut self.state, key);
        debug!(?key, ?outcome, "navigation key");
        self.reconcile();
        outcome
    }

    /// Pointer moved over `target`; returns true when the selection changed
    pub fn handle_move<T: IndexTarget + ?Sized>(&mut self, target: &T) -> bool {
        let changed = navigation::handle_move(&mut self.state, &self.attribute, target);
        if changed {
            debug!(hover = %self.state.hover(), "pointer hover");
            self.reconcile();
        }
        changed
    }

    pub fn handle_leave(&mut self) -> bool {
        let changed = navigation::handle_leave(&mut self.state);
        if changed {
            debug!("pointer left list");
            self.reconcile();
        }
        changed
    }

    /// The list contents were replaced; any new length selects index 0
    pub fn set_length(&mut self, length: usize) -> bool {
        let changed = self.state.on_length_change(length);
        if changed {
            debug!(length, "list length changed");
            self.scroller.reset();
            self.reconcile();
        }
        changed
    }

    /// Re-resolve the active element and scroll it into view when due
    pub fn reconcile(&mut self) -> Reconciled {
        let element_changed = self
            .state
            .resolve_active_element(&self.locator, &self.attribute);
        let container_height = self.container.as_ref().map(|c| c.client_height());
        let scroll = self.scroller.plan(&self.state, element_changed, container_height);

        if let (Some(request), Some(container)) = (scroll, self.container.as_mut()) {
            debug!(index = request.index, top = request.top, "scroll into view");
            container.scroll_to(request.top, request.behavior);
        }

        Reconciled {
            element_changed,
            scroll,
        }
    }
}
