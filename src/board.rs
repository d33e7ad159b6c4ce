use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_GRID, GridSize, INITIAL_DIRECTION, INITIAL_FOOD, INITIAL_SNAKE_HEAD,
    INITIAL_SNAKE_LENGTH,
};
use crate::error::BoardError;
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Point, Snake};

/// What occupies one grid cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    SnakeBody,
    Food,
}

/// Whether the game can still advance.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BoardStatus {
    Running,
    Collided,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionKind {
    /// The head would leave the grid.
    Wall,
    /// The head would enter its own body.
    SelfCollision,
    /// Eating would leave no free cell for the next food.
    NoRoom,
}

/// Final snapshot handed to the renderer and the score book once the game is over.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameOver {
    pub score: u32,
    pub cause: CollisionKind,
}

/// Result of one call to [`Board::advance`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TurnOutcome {
    /// The snake moved one cell.
    Moved,
    /// The snake moved onto food and grew.
    Ate,
    /// The game is over; the board was not changed.
    Collided(GameOver),
}

impl TurnOutcome {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Collided(_))
    }
}

/// Read-only view of a running board for renderers.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub width: u16,
    pub height: u16,
    /// Segments from head to tail.
    pub segments: &'a [Point],
    pub food: Point,
    pub score: u32,
    pub direction: Direction,
}

/// Authoritative game state: snake, food, score and the occupancy grid.
///
/// The grid mirrors `snake` and `food` after every call to [`Board::advance`].
#[derive(Debug, Clone)]
pub struct Board {
    bounds: GridSize,
    snake: Snake,
    food: Food,
    score: u32,
    cells: Vec<Cell>,
    status: BoardStatus,
    game_over: Option<GameOver>,
    rng: StdRng,
}

impl Board {
    /// Creates a board whose food respawns from system entropy.
    pub fn new(bounds: GridSize, snake: Snake, food: Food) -> Result<Self, BoardError> {
        Self::with_rng(bounds, snake, food, StdRng::from_entropy())
    }

    /// Creates a deterministic board for tests and reproducible simulations.
    pub fn new_with_seed(
        bounds: GridSize,
        snake: Snake,
        food: Food,
        seed: u64,
    ) -> Result<Self, BoardError> {
        Self::with_rng(bounds, snake, food, StdRng::seed_from_u64(seed))
    }

    /// The board the classic game starts with.
    pub fn classic() -> Result<Self, BoardError> {
        Self::new(
            DEFAULT_GRID,
            Snake::straight(INITIAL_SNAKE_HEAD, INITIAL_SNAKE_LENGTH, INITIAL_DIRECTION),
            Food::new(INITIAL_FOOD),
        )
    }

    fn with_rng(
        bounds: GridSize,
        snake: Snake,
        food: Food,
        rng: StdRng,
    ) -> Result<Self, BoardError> {
        validate_layout(bounds, &snake, food)?;

        let mut cells = vec![Cell::Empty; bounds.total_cells()];
        for &segment in snake.segments() {
            cells[cell_index(bounds, segment)] = Cell::SnakeBody;
        }
        cells[cell_index(bounds, food.position)] = Cell::Food;

        Ok(Self {
            bounds,
            snake,
            food,
            score: 0,
            cells,
            status: BoardStatus::Running,
            game_over: None,
            rng,
        })
    }

    /// Applies one turn with the requested direction.
    ///
    /// A reversal request is ignored and the snake keeps its heading. Wall and
    /// self collisions are detected against the pre-turn grid before anything
    /// changes, so a collided board is exactly the board before the call.
    pub fn advance(&mut self, requested: Direction) -> TurnOutcome {
        if let Some(game_over) = self.game_over {
            return TurnOutcome::Collided(game_over);
        }

        // A rejected request leaves the current heading in place.
        let direction = if self.snake.validate_direction(requested) {
            requested
        } else {
            self.snake.direction()
        };

        let next = self.snake.head().step(direction);
        let tail = self.snake.tail();

        let Some(target) = self.cell(next) else {
            return self.collide(CollisionKind::Wall);
        };

        // The tail vacates its cell this turn, so following it is legal.
        if target == Cell::SnakeBody && next != tail {
            return self.collide(CollisionKind::SelfCollision);
        }

        let eats = target == Cell::Food;
        if eats && self.snake.len() + 1 >= self.bounds.total_cells() {
            return self.collide(CollisionKind::NoRoom);
        }

        if eats {
            let snake = &self.snake;
            let cells = &self.cells;
            let bounds = self.bounds;
            let food = Food::spawn(&mut self.rng, bounds, |cell| {
                cell == next || cells[cell_index(bounds, cell)] == Cell::SnakeBody
            });
            debug_assert!(!snake.occupies(food.position));

            self.food = food;
            self.score += 1;
            self.snake.grow();
            debug!(
                "food eaten at {next}, score {}, new food at {}",
                self.score, food.position
            );
        } else {
            self.set_cell(tail, Cell::Empty);
        }

        self.snake.set_direction(direction);
        self.snake.shift_body();
        self.set_cell(next, Cell::SnakeBody);
        if eats {
            self.set_cell(self.food.position, Cell::Food);
        }
        self.snake.move_head_to(next);

        if eats {
            TurnOutcome::Ate
        } else {
            TurnOutcome::Moved
        }
    }

    fn collide(&mut self, cause: CollisionKind) -> TurnOutcome {
        let game_over = GameOver {
            score: self.score,
            cause,
        };
        debug!("collision ({cause:?}) with score {}", self.score);

        self.status = BoardStatus::Collided;
        self.game_over = Some(game_over);
        TurnOutcome::Collided(game_over)
    }

    /// Returns the occupant of `point`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, point: Point) -> Option<Cell> {
        point
            .is_within(self.bounds)
            .then(|| self.cells[cell_index(self.bounds, point)])
    }

    fn set_cell(&mut self, point: Point, cell: Cell) {
        let index = cell_index(self.bounds, point);
        self.cells[index] = cell;
    }

    /// Snapshot for renderers.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        BoardView {
            width: self.bounds.width,
            height: self.bounds.height,
            segments: self.snake.segments(),
            food: self.food.position,
            score: self.score,
            direction: self.snake.direction(),
        }
    }

    /// Final snapshot, present once the board has collided.
    #[must_use]
    pub fn game_over(&self) -> Option<GameOver> {
        self.game_over
    }

    #[must_use]
    pub fn status(&self) -> BoardStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Food {
        self.food
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}

/// Row-major index of an in-bounds point.
fn cell_index(bounds: GridSize, point: Point) -> usize {
    debug_assert!(point.is_within(bounds));
    // In-bounds coordinates are non-negative.
    point.x as usize * usize::from(bounds.height) + point.y as usize
}

fn validate_layout(bounds: GridSize, snake: &Snake, food: Food) -> Result<(), BoardError> {
    if bounds.total_cells() == 0 {
        return Err(BoardError::EmptyGrid {
            width: bounds.width,
            height: bounds.height,
        });
    }

    let segments = snake.segments();
    for (index, &point) in segments.iter().enumerate() {
        if !point.is_within(bounds) {
            return Err(BoardError::SegmentOutOfBounds { index, point });
        }

        if segments[..index].contains(&point) {
            return Err(BoardError::OverlappingSegments(point));
        }

        if index > 0 && !segments[index - 1].is_adjacent(point) {
            return Err(BoardError::DetachedSegment { index, point });
        }
    }

    if !food.position.is_within(bounds) {
        return Err(BoardError::FoodOutOfBounds(food.position));
    }

    if snake.occupies(food.position) {
        return Err(BoardError::FoodOnSnake(food.position));
    }

    Ok(())
}
