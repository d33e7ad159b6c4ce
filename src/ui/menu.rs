use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::board::{CollisionKind, GameOver};
use crate::score::ScoreBook;

/// Draws the game-over screen as a centered popup.
///
/// Shows this game's score and cause next to the best game in `book`.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    game_over: GameOver,
    book: &ScoreBook,
    new_best: bool,
) {
    let popup = centered_popup(area, 80, 80);
    frame.render_widget(Clear, popup);

    let best = match book.best {
        Some(best) => format!("Best: {} ({})", best.score, cause_name(best.cause)),
        None => "Best: -".to_owned(),
    };
    let title = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from("GAME OVER").style(title),
        Line::from(""),
        Line::from(format!("Your score: {}", game_over.score)),
        Line::from(format!("Cause: {}", cause_name(game_over.cause))),
        Line::from(best),
        Line::from(format!("Games played: {}", book.games_played)),
        Line::from(if new_best { "New high score!" } else { "" }),
        Line::from(""),
        Line::from("Press any key to exit").style(Style::new().fg(Color::DarkGray)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn cause_name(cause: CollisionKind) -> &'static str {
    match cause {
        CollisionKind::Wall => "hit wall",
        CollisionKind::SelfCollision => "hit yourself",
        CollisionKind::NoRoom => "no room left",
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
