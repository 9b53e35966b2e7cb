use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use listnav_core::navigation::parse_index;
use listnav_core::{AppConfig, IndexTarget, ListNavigator, ScrollBehavior};
use ratatui::layout::Rect;
use tracing::debug;

use crate::input::Action;
use crate::layout::{ListLayout, PointerTarget};
use crate::theme::Theme;
use crate::viewport::ListViewport;

/// Rows scrolled per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the list
    Normal,
    /// Typing a filter query
    Filter,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    /// All items, in input order
    items: Vec<String>,
    /// Indices into `items` that match the filter
    filtered: Vec<usize>,
    /// Filter query
    pub query: String,
    /// Current application mode
    pub mode: Mode,
    nav: ListNavigator<ListLayout, ListViewport>,
    /// Pointer was over the list body on its last move
    pointer_inside: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Item chosen with Enter or a click
    pub picked: Option<String>,
    /// Status message
    pub status_message: Option<String>,
}

impl App {
    /// Scope name the key binding options are matched against
    pub const SCOPE: &'static str = "list";
    pub const ROW_HEIGHT: u16 = 1;

    pub fn new(config: Arc<AppConfig>, items: Vec<String>) -> Self {
        let filtered: Vec<usize> = (0..items.len()).collect();
        let behavior = if config.ui.scroll.smooth_enabled {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        };
        let nav = ListNavigator::new(
            filtered.len(),
            config.ui.index_attribute.clone(),
            config.bindings.clone(),
            ListLayout::default(),
        )
        .with_scroll_behavior(behavior);

        Self {
            config,
            theme: Theme::default(),
            items,
            filtered,
            query: String::new(),
            mode: Mode::Normal,
            nav,
            pointer_inside: false,
            should_quit: false,
            picked: None,
            status_message: None,
        }
    }

    pub fn navigator(&self) -> &ListNavigator<ListLayout, ListViewport> {
        &self.nav
    }

    /// Number of items shown (after filtering)
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Item shown at `row` of the filtered list
    pub fn item(&self, row: usize) -> Option<&str> {
        self.filtered
            .get(row)
            .and_then(|&i| self.items.get(i))
            .map(String::as_str)
    }

    pub fn active_item(&self) -> Option<&str> {
        self.item(self.nav.active_index())
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Check if we're in a mode that accepts text input
    pub fn is_input_mode(&self) -> bool {
        self.mode == Mode::Filter
    }

    pub fn start_filter(&mut self) {
        self.mode = Mode::Filter;
        self.clear_status();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    /// Keep the query and return to the list
    pub fn confirm_filter(&mut self) {
        self.mode = Mode::Normal;
        if self.filtered.is_empty() {
            self.set_status(format!("No match for '{}'", self.query));
        }
    }

    /// Drop the query and return to the list
    pub fn cancel_filter(&mut self) {
        self.mode = Mode::Normal;
        self.clear_filter();
    }

    pub fn clear_filter(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        }
        self.clear_status();
    }

    fn refilter(&mut self) {
        let query = self.query.to_ascii_lowercase();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| query.is_empty() || item.to_ascii_lowercase().contains(&query))
            .map(|(i, _)| i)
            .collect();
        debug!(query = %self.query, matches = self.filtered.len(), "filter");

        let body = self.nav.locator().body();
        self.rebuild_layout(body);
        self.nav.set_length(self.filtered.len());
        self.sync_scroll_top();
    }

    /// Lay the list out inside `body`; called before every draw
    pub fn layout(&mut self, body: Rect) {
        if self.nav.locator().body() != body {
            self.rebuild_layout(body);
        }
        if self.nav.container().is_none() {
            let mut viewport = ListViewport::new(self.config.ui.scroll.clone());
            viewport.resize(body.height, self.nav.locator().content_height());
            self.nav.attach_container(viewport);
        }
        self.sync_scroll_top();
    }

    fn rebuild_layout(&mut self, body: Rect) {
        let layout = ListLayout::build(
            self.filtered.len(),
            body,
            Self::ROW_HEIGHT,
            &self.config.ui.index_attribute,
        );
        let content_height = layout.content_height();
        *self.nav.locator_mut() = layout;
        if let Some(viewport) = self.nav.container_mut() {
            viewport.resize(body.height, content_height);
        }
        self.nav.reconcile();
    }

    /// Copy the viewport offset into the layout used for drawing and hit-testing
    fn sync_scroll_top(&mut self) {
        let top = self.nav.container().map(ListViewport::scroll_top).unwrap_or(0);
        self.nav.locator_mut().set_scroll_top(top);
    }

    /// Advance scroll animations
    pub fn tick(&mut self, now: Instant) {
        if let Some(viewport) = self.nav.container_mut() {
            viewport.tick(now);
        }
        self.sync_scroll_top();
    }

    /// A scroll animation is running and wants frames
    pub fn needs_fast_update(&self) -> bool {
        self.nav
            .container()
            .is_some_and(ListViewport::needs_update)
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Navigate(key) => {
                self.nav.handle_key(key);
            }
            Action::Select => self.pick(self.nav.active_index()),
            Action::StartFilter => self.start_filter(),
            Action::ClearFilter => self.clear_filter(),
            Action::Confirm => self.confirm_filter(),
            Action::Cancel => self.cancel_filter(),
            Action::InputChar(c) => self.push_char(c),
            Action::Backspace => self.pop_char(),
            Action::None => {}
        }
    }

    /// Choose the item at `row` and quit
    fn pick(&mut self, row: usize) {
        match self.item(row).map(str::to_string) {
            Some(item) => {
                debug!(row, "picked");
                self.picked = Some(item);
                self.should_quit = true;
            }
            None => self.set_status("Nothing to select"),
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer_moved(mouse.column, mouse.row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let target = self.pointer_moved(mouse.column, mouse.row);
                let row = target
                    .and_then(|t| t.closest_attribute(self.nav.index_attribute()))
                    .and_then(|value| parse_index(&value));
                if let Some(row) = row {
                    self.pick(row);
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let delta = if mouse.kind == MouseEventKind::ScrollUp {
                    -WHEEL_STEP
                } else {
                    WHEEL_STEP
                };
                self.scroll_by(delta);
                // Rows moved under a still pointer
                self.pointer_moved(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    /// Route a pointer position to the navigator as a move or a leave
    fn pointer_moved(&mut self, column: u16, row: u16) -> Option<PointerTarget> {
        let target = self
            .nav
            .locator()
            .hit_test(column, row)
            .map(|hit| hit.detach());
        match &target {
            Some(target) => {
                self.pointer_inside = true;
                self.nav.handle_move(target);
            }
            None => {
                if std::mem::replace(&mut self.pointer_inside, false) {
                    self.nav.handle_leave();
                }
            }
        }
        target
    }

    /// The terminal lost focus, so the pointer is gone
    pub fn on_focus_lost(&mut self) {
        if std::mem::replace(&mut self.pointer_inside, false) {
            self.nav.handle_leave();
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        if let Some(viewport) = self.nav.container_mut() {
            viewport.scroll_by(delta);
        }
        self.sync_scroll_top();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyModifiers;
    use listnav_core::{Hover, NavKey};

    use super::*;

    fn app(count: usize) -> App {
        let items = (0..count).map(|i| format!("item {}", i)).collect();
        let mut app = App::new(Arc::new(AppConfig::default()), items);
        app.layout(Rect::new(0, 1, 20, 5));
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn settle(app: &mut App) {
        app.tick(Instant::now() + Duration::from_secs(5));
    }

    #[test]
    fn test_keyboard_scrolls_active_row_into_view() {
        let mut app = app(20);
        assert_eq!(app.active_item(), Some("item 0"));

        app.apply_action(Action::Navigate(NavKey::End));
        assert_eq!(app.navigator().active_index(), 19);
        assert!(app.needs_fast_update());
        settle(&mut app);
        assert!(!app.needs_fast_update());
        assert_eq!(app.navigator().locator().scroll_top(), 15);

        app.apply_action(Action::Navigate(NavKey::Down));
        assert_eq!(app.active_item(), Some("item 0"));
        settle(&mut app);
        assert_eq!(app.navigator().locator().scroll_top(), 0);
    }

    #[test]
    fn test_pointer_hover_selects_without_scrolling() {
        let mut app = app(20);
        app.on_mouse(mouse(MouseEventKind::Moved, 4, 3));
        assert_eq!(app.navigator().hover(), Hover::Item(2));
        assert_eq!(app.active_item(), Some("item 2"));
        assert!(!app.needs_fast_update());

        // Leaving the body, then a key press takes over again
        app.on_mouse(mouse(MouseEventKind::Moved, 30, 3));
        assert_eq!(app.navigator().hover(), Hover::Left);
        app.apply_action(Action::Navigate(NavKey::Down));
        assert_eq!(app.active_item(), Some("item 3"));
        assert_eq!(app.navigator().hover(), Hover::None);
    }

    #[test]
    fn test_focus_lost_counts_as_leave() {
        let mut app = app(5);
        app.on_focus_lost();
        assert_eq!(app.navigator().hover(), Hover::None);
        app.on_mouse(mouse(MouseEventKind::Moved, 4, 1));
        app.on_focus_lost();
        assert_eq!(app.navigator().hover(), Hover::Left);
    }

    #[test]
    fn test_click_picks_row() {
        let mut app = app(20);
        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        assert_eq!(app.picked.as_deref(), Some("item 4"));
        assert!(app.should_quit);
    }

    #[test]
    fn test_wheel_scroll_moves_hit_rows() {
        let mut app = app(20);
        app.on_mouse(mouse(MouseEventKind::ScrollDown, 30, 2));
        assert_eq!(app.navigator().locator().scroll_top(), 3);
        assert_eq!(app.navigator().active_index(), 0);
        assert_eq!(app.navigator().hover(), Hover::None);

        app.on_mouse(mouse(MouseEventKind::Moved, 4, 1));
        assert_eq!(app.active_item(), Some("item 3"));
    }

    #[test]
    fn test_wheel_rehovers_row_under_still_pointer() {
        let mut app = app(20);
        app.on_mouse(mouse(MouseEventKind::Moved, 4, 2));
        assert_eq!(app.navigator().hover(), Hover::Item(1));

        app.on_mouse(mouse(MouseEventKind::ScrollDown, 4, 2));
        assert_eq!(app.navigator().locator().scroll_top(), 3);
        assert_eq!(app.navigator().hover(), Hover::Item(4));
        assert_eq!(app.active_item(), Some("item 4"));

        // Keys continue from the row actually under the pointer
        app.apply_action(Action::Navigate(NavKey::Down));
        assert_eq!(app.active_item(), Some("item 5"));

        app.on_mouse(mouse(MouseEventKind::ScrollUp, 4, 2));
        assert_eq!(app.navigator().locator().scroll_top(), 0);
        assert_eq!(app.navigator().hover(), Hover::Item(1));
    }

    #[test]
    fn test_filter_resets_selection() {
        let mut app = app(20);
        app.apply_action(Action::Navigate(NavKey::End));
        app.apply_action(Action::StartFilter);
        assert!(app.is_input_mode());
        app.apply_action(Action::InputChar('1'));
        // item 1, item 10..19
        assert_eq!(app.len(), 11);
        assert_eq!(app.navigator().active_index(), 0);
        assert_eq!(app.active_item(), Some("item 1"));

        app.apply_action(Action::InputChar('5'));
        assert_eq!(app.len(), 1);
        assert_eq!(app.active_item(), Some("item 15"));

        app.apply_action(Action::Confirm);
        assert!(!app.is_input_mode());
        app.apply_action(Action::Select);
        assert_eq!(app.picked.as_deref(), Some("item 15"));
    }

    #[test]
    fn test_cancel_restores_full_list() {
        let mut app = app(20);
        app.start_filter();
        app.push_char('x');
        assert!(app.is_empty());
        app.apply_action(Action::Select);
        assert_eq!(app.picked, None);
        assert_eq!(app.status_message.as_deref(), Some("Nothing to select"));

        app.apply_action(Action::Cancel);
        assert_eq!(app.len(), 20);
        assert_eq!(app.query, "");
        assert_eq!(app.mode, Mode::Normal);
    }
}
