//! Keyboard input for the game loop.
//!
//! Key presses are translated into [`InputEvent`]s so the round never sees
//! crossterm types.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::runner::events::InputEvent;

/// Source of per-frame input.
pub trait InputSource {
    /// Everything that arrived since the last call. Never blocks.
    fn poll(&mut self) -> io::Result<Vec<InputEvent>>;
}

/// Reads the crossterm event queue of the controlling terminal.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(input) = map_key(key) {
                    events.push(input);
                }
            }
        }
        Ok(events)
    }
}

/// Key bindings. Unbound keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Up => Some(InputEvent::Jump),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(InputEvent::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Replays a fixed script, one batch per poll. Empty once exhausted.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: std::collections::VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        Ok(self.frames.pop_front().unwrap_or_default())
    }
}
