use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use std::time::Duration;

use pagewise::config::PaginationConfig;
use pagewise::pagination::{render_page_list, KeyMap, PageAction, PaginationFooter, Paginator};

use super::Backend;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Longest number a prompt accepts; keeps the input parseable as `i64`.
const MAX_PROMPT_DIGITS: usize = 18;

const BROWSER_HELP: &str = "g / :     Go to page\nCtrl+S    Set page size\n?         Toggle help\nq / Esc   Quit";

/// What a typed number will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptKind {
    GoToPage,
    PageSize,
}

impl PromptKind {
    fn label(self) -> &'static str {
        match self {
            PromptKind::GoToPage => "Go to page",
            PromptKind::PageSize => "Items per page",
        }
    }

    fn action(self, value: i64) -> PageAction {
        match self {
            PromptKind::GoToPage => PageAction::GoTo(value),
            PromptKind::PageSize => PageAction::SetPageSize(value),
        }
    }
}

/// Number entry in progress
#[derive(Debug, Clone)]
struct Prompt {
    kind: PromptKind,
    input: String,
}

/// Pages through a list of lines in the terminal.
pub struct Browser {
    title: String,
    items: Vec<String>,
    paginator: Paginator,
    keys: KeyMap,
    footer: PaginationFooter,
    config: PaginationConfig,
    prompt: Option<Prompt>,
    show_help: bool,
}

impl Browser {
    pub fn new(title: String, items: Vec<String>, paginator: Paginator, config: PaginationConfig) -> Self {
        Self {
            title,
            items,
            paginator,
            keys: KeyMap::default(),
            footer: PaginationFooter::default(),
            config,
            prompt: None,
            show_help: false,
        }
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn run(&mut self, terminal: &mut Terminal<Backend>) -> Result<()> {
        loop {
            self.draw(terminal)?;

            if event::poll(POLL_INTERVAL)? && !self.handle_event(event::read()?) {
                break;
            }
        }
        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal<Backend>) -> Result<()> {
        let view = self.paginator.view(&self.items);
        let mut footer_lines = self.footer.lines(&view);
        if let Some(prompt) = &self.prompt {
            footer_lines.push(self.footer.prompt_line(prompt.kind.label(), &prompt.input));
        }
        let footer_height = footer_lines.len() as u16;
        let list = render_page_list(&view, &self.title);
        let help = self
            .show_help
            .then(|| format!("{}\n{}", self.keys.help_text(), BROWSER_HELP));

        terminal.draw(|frame| {
            let mut constraints = vec![Constraint::Min(3), Constraint::Length(footer_height)];
            if let Some(text) = &help {
                constraints.push(Constraint::Length(text.lines().count() as u16 + 2));
            }
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(frame.size());

            frame.render_widget(list, chunks[0]);
            frame.render_widget(Paragraph::new(footer_lines), chunks[1]);
            if let Some(text) = help {
                let block = Block::default().borders(Borders::ALL).title("Keys (? to close)");
                frame.render_widget(Paragraph::new(text).block(block), chunks[2]);
            }
        })?;
        Ok(())
    }

    /// Text typed into the open prompt, if any.
    pub fn pending_input(&self) -> Option<&str> {
        self.prompt.as_ref().map(|prompt| prompt.input.as_str())
    }

    /// Handle one terminal event. Returns `false` once the user asks to quit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Release => None,
            Event::Key(key) if self.prompt.is_some() => self.handle_prompt_key(key),
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return false,
                KeyCode::Char('?') => {
                    self.show_help = !self.show_help;
                    None
                }
                KeyCode::Char('g') | KeyCode::Char(':') => {
                    self.open_prompt(PromptKind::GoToPage);
                    None
                }
                KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.open_prompt(PromptKind::PageSize);
                    None
                }
                _ => self.keys.action_for(&key),
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => Some(PageAction::Next),
                MouseEventKind::ScrollUp => Some(PageAction::Previous),
                _ => None,
            },
            _ => None,
        };

        if let Some(action) = action {
            self.paginator.bind(&self.items).apply(action, &self.config);
        }
        true
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(Prompt {
            kind,
            input: String::new(),
        });
    }

    /// Digits append, Backspace deletes, Enter submits, Esc cancels.
    fn handle_prompt_key(&mut self, key: KeyEvent) -> Option<PageAction> {
        let prompt = self.prompt.as_mut()?;
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if prompt.input.len() < MAX_PROMPT_DIGITS {
                    prompt.input.push(c);
                }
                None
            }
            KeyCode::Backspace => {
                prompt.input.pop();
                None
            }
            KeyCode::Enter => {
                let prompt = self.prompt.take()?;
                prompt
                    .input
                    .parse::<i64>()
                    .ok()
                    .map(|value| prompt.kind.action(value))
            }
            KeyCode::Esc => {
                self.prompt = None;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseEvent;

    fn browser(count: usize) -> Browser {
        let items = (1..=count).map(|n| format!("line {}", n)).collect();
        Browser::new("test".to_string(), items, Paginator::new(10), PaginationConfig::default())
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_keys(browser: &mut Browser, text: &str) {
        for c in text.chars() {
            browser.handle_event(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_keys_drive_paginator() {
        let mut browser = browser(45);
        assert!(browser.handle_event(press(KeyCode::Right)));
        assert_eq!(browser.paginator().page(), 2);
        assert!(browser.handle_event(press(KeyCode::End)));
        assert_eq!(browser.paginator().page(), 5);
        assert!(browser.handle_event(press(KeyCode::Char('s'))));
        assert_eq!(browser.paginator().page(), 1);
        assert_eq!(browser.paginator().page_size(), 20);
    }

    #[test]
    fn test_quit_keys() {
        let mut browser = browser(5);
        assert!(!browser.handle_event(press(KeyCode::Char('q'))));
        assert!(!browser.handle_event(press(KeyCode::Esc)));
    }

    #[test]
    fn test_go_to_page_prompt() {
        let mut browser = browser(100);
        type_keys(&mut browser, ":7");
        assert_eq!(browser.pending_input(), Some("7"));
        assert_eq!(browser.paginator().page(), 1);

        assert!(browser.handle_event(press(KeyCode::Enter)));
        assert_eq!(browser.paginator().page(), 7);
        assert_eq!(browser.pending_input(), None);

        type_keys(&mut browser, "g42");
        browser.handle_event(press(KeyCode::Backspace));
        assert_eq!(browser.pending_input(), Some("4"));
        browser.handle_event(press(KeyCode::Enter));
        assert_eq!(browser.paginator().page(), 4);
    }

    #[test]
    fn test_go_to_page_prompt_clamps() {
        let mut browser = browser(100);
        type_keys(&mut browser, "g999");
        browser.handle_event(press(KeyCode::Enter));
        assert_eq!(browser.paginator().page(), 10);

        type_keys(&mut browser, "g0");
        browser.handle_event(press(KeyCode::Enter));
        assert_eq!(browser.paginator().page(), 1);
    }

    #[test]
    fn test_prompt_escape_cancels_without_quitting() {
        let mut browser = browser(100);
        type_keys(&mut browser, "g5q");
        assert_eq!(browser.pending_input(), Some("5"));

        assert!(browser.handle_event(press(KeyCode::Esc)));
        assert_eq!(browser.pending_input(), None);
        assert_eq!(browser.paginator().page(), 1);

        type_keys(&mut browser, "g");
        assert!(browser.handle_event(press(KeyCode::Enter)));
        assert_eq!(browser.paginator().page(), 1);
    }

    #[test]
    fn test_page_size_prompt() {
        let mut browser = browser(100);
        browser.handle_event(press(KeyCode::End));
        assert_eq!(browser.paginator().page(), 10);

        browser.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        type_keys(&mut browser, "25");
        assert_eq!(browser.pending_input(), Some("25"));
        browser.handle_event(press(KeyCode::Enter));

        assert_eq!(browser.paginator().page_size(), 25);
        assert_eq!(browser.paginator().page(), 1);
    }

    #[test]
    fn test_mouse_scroll() {
        let mut browser = browser(30);
        let scroll = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })
        };
        browser.handle_event(scroll(MouseEventKind::ScrollDown));
        assert_eq!(browser.paginator().page(), 2);
        browser.handle_event(scroll(MouseEventKind::ScrollUp));
        assert_eq!(browser.paginator().page(), 1);
    }
}
