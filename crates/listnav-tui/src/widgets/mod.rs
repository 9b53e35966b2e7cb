mod nav_list;
mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

pub use nav_list::NavListWidget;
pub use status_bar::StatusBarWidget;

/// Lay out and draw the whole screen
pub fn draw(frame: &mut Frame, app: &mut App) {
    // Main layout: list + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    app.layout(NavListWidget::body(main_layout[0]));
    NavListWidget::render(frame, main_layout[0], app);
    StatusBarWidget::render(frame, main_layout[1], app);
}
