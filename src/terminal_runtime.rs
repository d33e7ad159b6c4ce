use std::io::{self, Stdout};

use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::{Frame, Terminal};

use crate::board::{BoardView, GameOver};
use crate::renderer::{render, render_game_over};
use crate::score::ScoreBook;

/// Where one game is drawn.
///
/// [`Screen::open`] takes over the real terminal (raw mode, alternate
/// screen). [`Screen::close`] gives it back before the final score is
/// printed to the normal screen. An open screen that is dropped on an early
/// return is restored as well; panics are covered by the hook `ratatui`
/// installs when the screen opens.
pub struct Screen<B: Backend = CrosstermBackend<Stdout>> {
    terminal: Terminal<B>,
    owns_tty: bool,
}

impl Screen {
    /// Switches stdout to raw mode on the alternate screen.
    pub fn open() -> io::Result<Self> {
        let terminal = ratatui::try_init().inspect_err(|_| ratatui::restore())?;

        Ok(Self {
            terminal,
            owns_tty: true,
        })
    }
}

impl<B: Backend> Screen<B> {
    /// Draws on a terminal the caller has already set up, leaving its
    /// modes alone on close.
    pub fn with_terminal(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            owns_tty: false,
        }
    }

    pub fn show_board(&mut self, view: &BoardView<'_>, best: u32) -> io::Result<()> {
        self.draw(|frame| render(frame, view, best))
    }

    pub fn show_game_over(
        &mut self,
        game_over: GameOver,
        book: &ScoreBook,
        new_best: bool,
    ) -> io::Result<()> {
        self.draw(|frame| render_game_over(frame, game_over, book, new_best))
    }

    /// Restores the terminal and reports what a drop would have to ignore.
    pub fn close(mut self) -> io::Result<()> {
        self.terminal.show_cursor()?;

        if self.owns_tty {
            self.owns_tty = false;
            ratatui::try_restore()?;
        }
        Ok(())
    }

    fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl<B: Backend> Drop for Screen<B> {
    fn drop(&mut self) {
        if self.owns_tty {
            ratatui::restore();
        }
    }
}
