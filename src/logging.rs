use std::fs::{self, File};
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::error::AppError;

/// Routes `log` output to `path`; the terminal itself belongs to the game.
///
/// Debug builds also record per-turn events.
pub fn init(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(level, config, File::create(path)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::process;

    use crate::error::AppError;

    use super::init;

    #[test]
    fn unusable_log_directory_is_returned_as_an_error() {
        let blocker = std::env::temp_dir().join(format!("retro-snake-log-{}", process::id()));
        fs::write(&blocker, "not a directory").expect("test file should be writable");

        let result = init(&blocker.join("retro-snake.log"));
        let _ = fs::remove_file(&blocker);

        assert!(matches!(result, Err(AppError::Io(_))), "{result:?}");
    }
}
