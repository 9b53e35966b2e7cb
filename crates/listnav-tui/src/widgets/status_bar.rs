use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let status_text = match (&app.mode, &app.status_message) {
            (Mode::Filter, _) => format!(" FILTER /{}", app.query),
            (Mode::Normal, Some(msg)) => format!(" {}", msg),
            (Mode::Normal, None) => {
                let nav = app.navigator();
                let position = if app.is_empty() {
                    "0/0".to_string()
                } else {
                    format!("{}/{}", nav.active_index() + 1, app.len())
                };
                format!(" NORMAL | {} | hover: {}", position, nav.hover().raw())
            }
        };

        let help_hint = match app.mode {
            Mode::Normal => " q:quit j/k:move /:filter Enter:select ",
            Mode::Filter => " Enter:apply Esc:cancel ",
        };
        let padding_len = usize::from(area.width)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey2).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
