//! Terminal backend (crossterm)
//!
//! Raw mode + alternate screen while the game runs. Terminals only report
//! key presses unless they support the keyboard enhancement protocol, so a
//! key without release events counts as held for a short window after its
//! last press or auto-repeat.

use std::collections::HashMap;
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

use super::Platform;
use crate::input::{InputEvent, Key, KeyState};
use crate::renderer::{Canvas, Color};

/// How long a freshly pressed key counts as held without a release event.
/// Must outlast the keyboard's auto-repeat delay (commonly 250-660 ms) or
/// a held key stalls until repeats start; a single tap moves for this long.
pub const FIRST_PRESS_HOLD: Duration = Duration::from_millis(500);

/// Window once auto-repeat is running, a few repeat intervals
pub const REPEAT_HOLD: Duration = Duration::from_millis(120);

/// Map a terminal key code to a game key
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
        _ => None,
    }
}

/// When a key was last seen and whether it has started repeating
#[derive(Debug, Clone, Copy)]
struct Seen {
    at: Instant,
    repeating: bool,
}

/// Held-key bookkeeping from a press/release stream
#[derive(Debug)]
pub struct KeyTracker {
    state: KeyState,
    last_seen: HashMap<Key, Seen>,
    /// Terminal reports releases, so no hold window is needed
    releases: bool,
}

impl KeyTracker {
    pub fn new(releases: bool) -> Self {
        Self {
            state: KeyState::new(),
            last_seen: HashMap::new(),
            releases,
        }
    }

    /// Record a press. A press of a key that is still held is an auto-repeat.
    pub fn press(&mut self, key: Key, now: Instant) {
        let repeating = self.last_seen.contains_key(&key);
        self.state.press(key);
        self.last_seen.insert(key, Seen { at: now, repeating });
    }

    pub fn release(&mut self, key: Key) {
        self.state.release(key);
        self.last_seen.remove(&key);
    }

    /// Drop keys whose hold window ran out
    pub fn expire(&mut self, now: Instant) {
        if self.releases {
            return;
        }
        let stale: Vec<Key> = self
            .last_seen
            .iter()
            .filter(|(_, seen)| {
                let window = if seen.repeating {
                    REPEAT_HOLD
                } else {
                    FIRST_PRESS_HOLD
                };
                now.duration_since(seen.at) > window
            })
            .map(|(key, _)| *key)
            .collect();
        for key in stale {
            self.release(key);
        }
    }

    pub fn state(&self) -> &KeyState {
        &self.state
    }
}

/// The running terminal session
pub struct Terminal {
    out: Stdout,
    keys: KeyTracker,
    enhanced: bool,
}

impl Terminal {
    /// Enter raw mode and the alternate screen
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;

        let enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true));
        if enhanced {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        log::info!(
            "Terminal ready (key release events: {})",
            if enhanced { "yes" } else { "no" }
        );

        Ok(Self {
            out,
            keys: KeyTracker::new(enhanced),
            enhanced,
        })
    }

    fn handle_key(&mut self, key_event: KeyEvent, events: &mut Vec<InputEvent>) {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            events.push(InputEvent::Quit);
            return;
        }
        let Some(key) = map_key(key_event.code) else {
            return;
        };
        match key_event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.keys.press(key, Instant::now());
                events.push(InputEvent::KeyDown(key));
            }
            KeyEventKind::Release => self.keys.release(key),
        }
    }
}

fn to_term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Platform for Terminal {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key_event) => self.handle_key(key_event, &mut events),
                Event::Resize(_, _) => execute!(self.out, Clear(ClearType::All))?,
                _ => {}
            }
        }
        self.keys.expire(Instant::now());
        Ok(events)
    }

    fn key_state(&self) -> &KeyState {
        self.keys.state()
    }

    fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        let mut colors: Option<(Color, Color)> = None;
        for row in 0..canvas.rows() {
            queue!(self.out, cursor::MoveTo(0, row as u16))?;
            for cell in canvas.row(row) {
                if colors != Some((cell.fg, cell.bg)) {
                    queue!(
                        self.out,
                        SetForegroundColor(to_term_color(cell.fg)),
                        SetBackgroundColor(to_term_color(cell.bg))
                    )?;
                    colors = Some((cell.fg, cell.bg));
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.enhanced {
            let _ = execute!(self.out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
