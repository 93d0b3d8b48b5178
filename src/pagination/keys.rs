//! Keyboard-shortcut dispatch for paginated views.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::engine::Pager;
use crate::config::PaginationConfig;

/// A navigation request a key (or any other control) can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Next,
    Previous,
    First,
    Last,
    /// Skip forward by `jump_pages`
    JumpForward,
    /// Skip back by `jump_pages`
    JumpBack,
    GoTo(i64),
    SetPageSize(i64),
    /// Step to the next entry in `available_page_sizes`
    CyclePageSize,
}

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: String,
}

impl KeyBinding {
    pub fn new(key: KeyCode, modifiers: KeyModifiers, description: &str) -> Self {
        Self {
            key,
            modifiers,
            description: description.to_string(),
        }
    }

    /// Shift is ignored for character keys, since terminals report `G`
    /// both with and without it.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.code {
            return false;
        }
        match event.code {
            KeyCode::Char(_) => {
                event.modifiers.difference(KeyModifiers::SHIFT)
                    == self.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => event.modifiers == self.modifiers,
        }
    }
}

/// Key bindings for pagination controls
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(KeyBinding, PageAction)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let none = KeyModifiers::NONE;
        let bindings = vec![
            (KeyBinding::new(KeyCode::Right, none, "Next page"), PageAction::Next),
            (KeyBinding::new(KeyCode::Char('l'), none, "Next page"), PageAction::Next),
            (KeyBinding::new(KeyCode::Left, none, "Previous page"), PageAction::Previous),
            (KeyBinding::new(KeyCode::Char('h'), none, "Previous page"), PageAction::Previous),
            (KeyBinding::new(KeyCode::Home, none, "First page"), PageAction::First),
            (KeyBinding::new(KeyCode::End, none, "Last page"), PageAction::Last),
            (KeyBinding::new(KeyCode::Char('G'), none, "Last page"), PageAction::Last),
            (KeyBinding::new(KeyCode::PageDown, none, "Jump forward"), PageAction::JumpForward),
            (KeyBinding::new(KeyCode::PageUp, none, "Jump back"), PageAction::JumpBack),
            (KeyBinding::new(KeyCode::Char('s'), none, "Cycle page size"), PageAction::CyclePageSize),
        ];
        Self { bindings }
    }
}

impl KeyMap {
    /// Look up the action bound to a key event.
    pub fn action_for(&self, event: &KeyEvent) -> Option<PageAction> {
        self.bindings
            .iter()
            .find(|(binding, _)| binding.matches(event))
            .map(|(_, action)| *action)
    }

    /// Add a binding. Later bindings lose to earlier ones for the same key.
    pub fn bind(&mut self, binding: KeyBinding, action: PageAction) {
        self.bindings.push((binding, action));
    }

    /// One line per binding: `<key>  <description>`.
    pub fn help_text(&self) -> String {
        self.bindings
            .iter()
            .map(|(binding, _)| format!("{:<10}{}", key_label(binding.key), binding.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        other => format!("{:?}", other),
    }
}

impl<'p, 'a, T> Pager<'p, 'a, T> {
    /// Perform a navigation action. Returns whether the page state changed.
    pub fn apply(&mut self, action: PageAction, config: &PaginationConfig) -> bool {
        trace!(?action, "applying page action");
        match action {
            PageAction::Next => self.next_page(),
            PageAction::Previous => self.previous_page(),
            PageAction::First => self.first_page(),
            PageAction::Last => self.last_page(),
            PageAction::JumpForward => self.jump_forward(config.jump_pages),
            PageAction::JumpBack => self.jump_back(config.jump_pages),
            PageAction::GoTo(page) => self.go_to_page(page),
            PageAction::SetPageSize(size) => self.set_page_size(size),
            PageAction::CyclePageSize => {
                let next = config.next_page_size(self.page_size());
                self.set_page_size(i64::try_from(next).unwrap_or(i64::MAX))
            }
        }
    }
}
