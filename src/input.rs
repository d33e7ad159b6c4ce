use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit `(dx, dy)` step for this direction.
    ///
    /// `x` counts rows and `y` counts columns, so vertical moves change `x`.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Maps a `w`/`a`/`s`/`d` key to a direction.
    ///
    /// Returns `None` for every other symbol; callers ignore those.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Self::Up),
            'a' => Some(Self::Left),
            's' => Some(Self::Down),
            'd' => Some(Self::Right),
            _ => None,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Translates one key event into a game input.
///
/// ESC quits. Ctrl+C quits too, because raw mode swallows the interrupt signal.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Char(symbol) => Direction::from_key(symbol).map(GameInput::Direction),
        _ => None,
    }
}

/// Non-blocking keyboard reader for a terminal in raw mode.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Reads at most one pending event without waiting.
    ///
    /// An empty queue is `Ok(None)`; only real terminal failures are errors.
    pub fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }

    /// Blocks until any key is pressed.
    pub fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{Direction, GameInput, direction_change_is_valid, map_key_event};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn deltas_move_along_rows_and_columns() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn wasd_maps_to_directions() {
        assert_eq!(Direction::from_key('w'), Some(Direction::Up));
        assert_eq!(Direction::from_key('a'), Some(Direction::Left));
        assert_eq!(Direction::from_key('s'), Some(Direction::Down));
        assert_eq!(Direction::from_key('d'), Some(Direction::Right));

        assert_eq!(Direction::from_key('q'), None);
        assert_eq!(Direction::from_key('W'), None);
        assert_eq!(Direction::from_key(' '), None);
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Down, Direction::Up));
        assert!(!direction_change_is_valid(Direction::Left, Direction::Right));
        assert!(!direction_change_is_valid(Direction::Right, Direction::Left));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn key_events_map_to_game_inputs() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(map_key_event(press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(
            map_key_event(press(KeyCode::Char('d'))),
            Some(GameInput::Direction(Direction::Right))
        );
        assert_eq!(map_key_event(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key_event(press(KeyCode::Up)), None);
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
    }
}
