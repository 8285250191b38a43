//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which of the two Counter instances
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CounterSlot {
    #[default]
    First,
    Second,
}

impl CounterSlot {
    pub const ALL: [CounterSlot; 2] = [CounterSlot::First, CounterSlot::Second];

    pub fn index(&self) -> usize {
        match self {
            CounterSlot::First => 0,
            CounterSlot::Second => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CounterSlot::First => "Counter #1",
            CounterSlot::Second => "Counter #2",
        }
    }

    pub fn next(&self) -> CounterSlot {
        match self {
            CounterSlot::First => CounterSlot::Second,
            CounterSlot::Second => CounterSlot::First,
        }
    }

    pub fn prev(&self) -> CounterSlot {
        // Two slots, so stepping back is the same as stepping forward
        self.next()
    }
}

/// Events handled by the App actor
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Shared state, tagged with the mount the setter belongs to
    SetCount { value: i64, generation: u64 },

    // Focus
    FocusNext,
    FocusPrev,
    Focus(CounterSlot),

    // Lifecycle
    Remount,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// What a key press means to the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// Press the increment affordance of a Counter
    Activate(CounterSlot),
    /// Forward to the App actor
    Dispatch(UiEvent),
}

/// Convert a key event to a KeyAction based on current UI context
pub fn key_to_action(key: KeyEvent, focused: CounterSlot, show_help: bool) -> Option<KeyAction> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Dispatch(UiEvent::Quit));
    }

    if show_help {
        return Some(KeyAction::Dispatch(UiEvent::CloseHelp));
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('+') => {
            Some(KeyAction::Activate(focused))
        }
        KeyCode::Char('1') => Some(KeyAction::Activate(CounterSlot::First)),
        KeyCode::Char('2') => Some(KeyAction::Activate(CounterSlot::Second)),
        KeyCode::Tab | KeyCode::Right | KeyCode::Down => {
            Some(KeyAction::Dispatch(UiEvent::FocusNext))
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Up => {
            Some(KeyAction::Dispatch(UiEvent::FocusPrev))
        }
        KeyCode::Char('r') => Some(KeyAction::Dispatch(UiEvent::Remount)),
        KeyCode::Char('?') => Some(KeyAction::Dispatch(UiEvent::ToggleHelp)),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Dispatch(UiEvent::Quit)),
        _ => None,
    }
}
