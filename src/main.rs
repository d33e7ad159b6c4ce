use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{error, info, warn};
use retro_snake::board::{Board, GameOver, TurnOutcome};
use retro_snake::config::{Cli, INITIAL_DIRECTION, POLL_INTERVAL_MS, Settings};
use retro_snake::error::AppError;
use retro_snake::input::{GameInput, InputHandler};
use retro_snake::logging;
use retro_snake::score::ScoreBook;
use retro_snake::terminal_runtime::Screen;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            // Help and version are not failures; every bad argument exits 1.
            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings = Settings::from_cli(cli)?;
    if let Err(error) = logging::init(&settings.log_file) {
        eprintln!("warning: playing without a log file: {error}");
    }
    info!("starting at speed {}", settings.speed);

    let mut book = ScoreBook::load(&settings.scores_file).unwrap_or_else(|error| {
        warn!("starting a fresh score book: {error}");
        ScoreBook::default()
    });
    let mut board = Board::classic()?;

    let mut screen = Screen::open()?;
    let Some(game_over) = play(&mut screen, &mut board, &settings, book.best_score())? else {
        screen.close()?;
        info!("quit with score {}", board.score());
        return Ok(());
    };

    let new_best = book.record(game_over);
    screen.show_game_over(game_over, &book, new_best)?;
    InputHandler::new().wait_for_key()?;
    // The final lines go to the normal screen, not the alternate one.
    screen.close()?;

    info!("game over: {game_over:?}");
    println!("Game over!\nYour score: {}", game_over.score);
    if new_best {
        println!("New high score!");
    }

    if let Err(error) = book.save(&settings.scores_file) {
        warn!("failed to save score book: {error}");
    }
    Ok(())
}

/// Runs turns until the snake collides (`Some`) or the player quits (`None`).
fn play(
    screen: &mut Screen,
    board: &mut Board,
    settings: &Settings,
    best: u32,
) -> Result<Option<GameOver>, AppError> {
    let mut input = InputHandler::new();
    let turn_interval = settings.speed.turn_interval();
    let mut direction = INITIAL_DIRECTION;
    let mut last_turn = Instant::now();

    screen.show_board(&board.view(), best)?;

    loop {
        match input.poll_input()? {
            Some(GameInput::Quit) => return Ok(None),
            Some(GameInput::Direction(requested)) => direction = requested,
            None => {}
        }

        thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));

        if last_turn.elapsed() < turn_interval {
            continue;
        }
        last_turn = Instant::now();

        if let TurnOutcome::Collided(game_over) = board.advance(direction) {
            return Ok(Some(game_over));
        }

        screen.show_board(&board.view(), best)?;
    }
}
