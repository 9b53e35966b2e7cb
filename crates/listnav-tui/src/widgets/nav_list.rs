use listnav_core::Hover;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::layout::MARKER_WIDTH;
use crate::theme::Theme;

pub struct NavListWidget;

impl NavListWidget {
    fn block(app: &App) -> Block<'static> {
        let title = if app.query.is_empty() {
            format!(" Items ({}) ", app.len())
        } else {
            format!(" Items ({}) /{} ", app.len(), app.query)
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.bg0))
    }

    /// Area the rows are drawn into, inside the border
    pub fn body(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Self::block(app);
        frame.render_widget(block, area);

        let nav = app.navigator();
        let layout = nav.locator();
        let body = layout.body();
        let theme = &app.theme;
        let query = app.query.to_ascii_lowercase();
        let label_width = usize::from(body.width.saturating_sub(MARKER_WIDTH));

        for (row, y) in layout.visible_rows() {
            let Some(item) = app.item(row) else {
                continue;
            };
            let active = row == nav.active_index();
            let hovered = nav.hover() == Hover::Item(row);

            let mut base = Style::default().fg(theme.fg0);
            if active {
                base = base.bg(theme.selection).add_modifier(Modifier::BOLD);
            }
            if hovered {
                base = base.fg(theme.hover);
            }

            let marker = if active { "▶ " } else { "  " };
            let label = truncate(item, label_width);
            let mut spans = vec![Span::styled(marker, base.fg(theme.accent))];
            spans.extend(highlight_matches(label, &query, base, theme));

            let area = Rect::new(body.x, y, body.width, layout.row_height());
            let paragraph = Paragraph::new(Line::from(spans)).style(base);
            frame.render_widget(paragraph, area);
        }
    }
}

/// Cut `text` to at most `width` terminal columns
fn truncate(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &text[..i];
        }
    }
    text
}

/// Highlight matching parts of a string with a different color
fn highlight_matches<'a>(text: &'a str, query: &str, base: Style, theme: &Theme) -> Vec<Span<'a>> {
    if query.is_empty() {
        return vec![Span::styled(text, base)];
    }

    let mut spans = Vec::new();
    // ASCII lowering keeps byte offsets aligned with `text`
    let lower = text.to_ascii_lowercase();
    let mut last_end = 0;
    for (start, matched) in lower.match_indices(query) {
        if start > last_end {
            spans.push(Span::styled(&text[last_end..start], base));
        }
        let end = start + matched.len();
        spans.push(Span::styled(
            &text[start..end],
            base.fg(theme.bg0).bg(theme.matched),
        ));
        last_end = end;
    }
    if last_end < text.len() {
        spans.push(Span::styled(&text[last_end..], base));
    }
    spans
}
