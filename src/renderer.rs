use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::board::{BoardView, GameOver};
use crate::score::ScoreBook;
use crate::snake::Point;
use crate::ui::menu::render_game_over_menu;

const GLYPH_EMPTY: char = '.';
const GLYPH_FOOD: char = 'X';
const GLYPH_SNAKE_HEAD: char = 'O';
const GLYPH_SNAKE_BODY: char = 'o';

/// Text rows of the board, one per `x`, one glyph per `y`.
#[must_use]
pub fn board_lines(view: &BoardView<'_>) -> Vec<String> {
    let rows = usize::from(view.width);
    let columns = usize::from(view.height);
    let mut canvas = vec![vec![GLYPH_EMPTY; columns]; rows];

    let mut put = |point: Point, glyph: char| {
        if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
            if x < rows && y < columns {
                canvas[x][y] = glyph;
            }
        }
    };

    put(view.food, GLYPH_FOOD);
    for segment in view.segments.iter().skip(1) {
        put(*segment, GLYPH_SNAKE_BODY);
    }
    if let Some(head) = view.segments.first() {
        put(*head, GLYPH_SNAKE_HEAD);
    }

    canvas
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect()
}

/// Draws the running board with a score line underneath.
///
/// `best` is the best score from earlier games.
pub fn render(frame: &mut Frame<'_>, view: &BoardView<'_>, best: u32) {
    let board_height = view.width.saturating_add(2);
    let board_width = view.height.saturating_add(2);
    let frame_area = frame.area();
    let area = centered_rect(frame_area, board_width, board_height.saturating_add(1));

    let [board_area, status_row] =
        Layout::vertical([Constraint::Length(board_height), Constraint::Length(1)]).areas(area);
    // The score line may be wider than a narrow board.
    let status_area = Rect {
        x: frame_area.x,
        width: frame_area.width,
        ..status_row
    };

    let lines: Vec<Line<'_>> = board_lines(view)
        .into_iter()
        .map(|row| Line::from(styled_row(row)))
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" snake ")),
        board_area,
    );

    let status = format!("Score: {}  Hi: {}", view.score, best.max(view.score));
    frame.render_widget(
        Paragraph::new(status)
            .alignment(Alignment::Center)
            .style(Style::new().fg(Color::White)),
        status_area,
    );
}

/// Draws the final score once the game is over.
///
/// `book` already holds `game_over`; `new_best` is what recording it returned.
pub fn render_game_over(
    frame: &mut Frame<'_>,
    game_over: GameOver,
    book: &ScoreBook,
    new_best: bool,
) {
    let area = frame.area();
    render_game_over_menu(frame, area, game_over, book, new_best);
}

fn styled_row(row: String) -> Vec<Span<'static>> {
    row.chars()
        .map(|glyph| {
            let style = match glyph {
                GLYPH_SNAKE_HEAD => Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
                GLYPH_SNAKE_BODY => Style::new().fg(Color::Green),
                GLYPH_FOOD => Style::new().fg(Color::Red),
                _ => Style::new().fg(Color::DarkGray),
            };
            Span::styled(glyph.to_string(), style)
        })
        .collect()
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
