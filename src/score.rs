use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::GameOver;
use crate::error::ScoreError;

/// Finished games, kept between runs as pretty-printed JSON.
///
/// Each entry is the [`GameOver`] the board produced, so the book remembers
/// how the best game ended as well as what it scored.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBook {
    pub games_played: u32,
    pub best: Option<GameOver>,
    pub last: Option<GameOver>,
}

impl ScoreBook {
    /// Reads the book at `path`. A missing file is an empty book.
    pub fn load(path: &Path) -> Result<Self, ScoreError> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(error.into()),
        }
    }

    /// Writes the book to `path`, creating its directory first.
    pub fn save(&self, path: &Path) -> Result<(), ScoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Score of the best game so far, or zero before any game scored.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best.map_or(0, |best| best.score)
    }

    /// Adds a finished game and returns true when it beats every earlier one.
    ///
    /// A tie keeps the earlier game as the best.
    pub fn record(&mut self, game_over: GameOver) -> bool {
        self.games_played = self.games_played.saturating_add(1);
        self.last = Some(game_over);

        let is_best = game_over.score > self.best_score();
        if is_best {
            debug!("new best game: {game_over:?}");
            self.best = Some(game_over);
        }
        is_best
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process;

    use crate::board::{CollisionKind, GameOver};
    use crate::error::ScoreError;

    use super::ScoreBook;

    fn game(score: u32, cause: CollisionKind) -> GameOver {
        GameOver { score, cause }
    }

    /// A directory of its own per test, removed again by `cleanup`.
    fn book_path(label: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("retro-snake-{label}-{}", process::id()))
            .join("scores.json")
    }

    fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn first_scoring_game_becomes_the_best() {
        let mut book = ScoreBook::default();

        assert!(book.record(game(3, CollisionKind::Wall)));
        assert_eq!(book.games_played, 1);
        assert_eq!(book.best_score(), 3);
        assert_eq!(book.best, book.last);
    }

    #[test]
    fn scoreless_game_is_counted_but_never_best() {
        let mut book = ScoreBook::default();

        assert!(!book.record(game(0, CollisionKind::SelfCollision)));
        assert_eq!(book.games_played, 1);
        assert_eq!(book.best, None);
        assert_eq!(book.last, Some(game(0, CollisionKind::SelfCollision)));
    }

    #[test]
    fn tie_keeps_the_earlier_best_and_its_cause() {
        let mut book = ScoreBook::default();
        book.record(game(5, CollisionKind::Wall));

        assert!(!book.record(game(5, CollisionKind::SelfCollision)));
        assert!(!book.record(game(2, CollisionKind::NoRoom)));

        assert_eq!(book.games_played, 3);
        assert_eq!(book.best, Some(game(5, CollisionKind::Wall)));
        assert_eq!(book.last, Some(game(2, CollisionKind::NoRoom)));
    }

    #[test]
    fn saved_book_keeps_scores_and_causes() {
        let path = book_path("saved-book");
        let mut book = ScoreBook::default();
        book.record(game(8, CollisionKind::NoRoom));
        book.record(game(1, CollisionKind::Wall));

        book.save(&path).expect("book should save");
        let raw = fs::read_to_string(&path).expect("book file should exist");
        let loaded = ScoreBook::load(&path).expect("book should load");
        cleanup(&path);

        assert!(raw.contains("\"no_room\""), "{raw}");
        assert_eq!(loaded, book);
    }

    #[test]
    fn missing_book_loads_empty() {
        let path = book_path("missing-book");

        assert_eq!(ScoreBook::load(&path).ok(), Some(ScoreBook::default()));
    }

    #[test]
    fn older_book_without_last_game_still_loads() {
        let path = book_path("partial-book");
        let dir = path.parent().expect("book path has a directory");
        fs::create_dir_all(dir).expect("test directory should be creatable");
        fs::write(
            &path,
            r#"{"games_played": 4, "best": {"score": 6, "cause": "wall"}}"#,
        )
        .expect("test file should be writable");

        let loaded = ScoreBook::load(&path);
        cleanup(&path);

        let book = loaded.expect("partial book should load");
        assert_eq!(book.games_played, 4);
        assert_eq!(book.best, Some(game(6, CollisionKind::Wall)));
        assert_eq!(book.last, None);
    }

    #[test]
    fn corrupt_book_is_a_format_error() {
        let path = book_path("corrupt-book");
        let dir = path.parent().expect("book path has a directory");
        fs::create_dir_all(dir).expect("test directory should be creatable");
        fs::write(&path, "high score: lots").expect("test file should be writable");

        let loaded = ScoreBook::load(&path);
        cleanup(&path);

        assert!(matches!(loaded, Err(ScoreError::Format(_))), "{loaded:?}");
    }
}
