//! Terminal rendering for a page view.

use std::fmt::Display;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::engine::PageView;

/// Styling for the pagination footer
#[derive(Debug, Clone)]
pub struct FooterStyle {
    /// Style for an enabled navigation arrow
    pub navigation_style: Style,

    /// Style for an arrow that leads nowhere
    pub disabled_style: Style,

    /// Style for text elements
    pub text_style: Style,

    /// Style for pending prompt input
    pub input_style: Style,
}

impl Default for FooterStyle {
    fn default() -> Self {
        Self {
            navigation_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled_style: Style::default().fg(Color::DarkGray),
            text_style: Style::default().fg(Color::White),
            input_style: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }
}

/// Page indicator and range summary lines for a view.
#[derive(Debug, Clone, Default)]
pub struct PaginationFooter {
    style: FooterStyle,
}

impl PaginationFooter {
    pub fn new(style: FooterStyle) -> Self {
        Self { style }
    }

    /// `< Page X of Y >` with the arrows dimmed when unavailable.
    pub fn page_line<T>(&self, view: &PageView<'_, T>) -> Line<'static> {
        let arrow = |enabled: bool, glyph: &'static str| {
            let style = if enabled {
                self.style.navigation_style
            } else {
                self.style.disabled_style
            };
            Span::styled(glyph, style)
        };

        Line::from(vec![
            arrow(view.has_previous_page, "< "),
            Span::styled(
                format!("Page {} of {}", view.page, view.total_pages.max(1)),
                self.style.text_style,
            ),
            arrow(view.has_next_page, " >"),
        ])
    }

    pub fn summary_line<T>(&self, view: &PageView<'_, T>) -> Line<'static> {
        Line::from(Span::styled(view.summary(), self.style.text_style))
    }

    /// `<label>: <input>_` for a prompt that is still being typed.
    pub fn prompt_line(&self, label: &str, input: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{}: ", label), self.style.text_style),
            Span::styled(input.to_string(), self.style.input_style),
            Span::styled("_", self.style.input_style),
        ])
    }

    pub fn lines<T>(&self, view: &PageView<'_, T>) -> Vec<Line<'static>> {
        vec![self.page_line(view), self.summary_line(view)]
    }
}

/// Row labels for the visible slice, numbered by position in the whole
/// collection.
pub fn page_rows<T: Display>(view: &PageView<'_, T>) -> Vec<String> {
    let offset = view.index_range().start;
    view.items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{:>5}  {}", offset + index + 1, item))
        .collect()
}

/// Render the visible slice as a bordered list.
pub fn render_page_list<'a, T: Display>(view: &PageView<'_, T>, title: &'a str) -> List<'a> {
    let rows: Vec<ListItem> = page_rows(view).into_iter().map(ListItem::new).collect();
    List::new(rows).block(Block::default().borders(Borders::ALL).title(title))
}
