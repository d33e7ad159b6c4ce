use rand::Rng;

use crate::config::GridSize;
use crate::snake::Point;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Point,
}

impl Food {
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self { position }
    }

    /// Spawns food on a random cell for which `occupied` is false.
    #[must_use]
    pub fn spawn<R, F>(rng: &mut R, bounds: GridSize, occupied: F) -> Self
    where
        R: Rng + ?Sized,
        F: Fn(Point) -> bool,
    {
        Self::new(place_random(rng, bounds, occupied))
    }
}

/// Samples uniformly random cells until one is not `occupied`.
///
/// The search is unbounded. Callers must guarantee that at least one free cell
/// exists, otherwise this never returns.
#[must_use]
pub fn place_random<R, F>(rng: &mut R, bounds: GridSize, occupied: F) -> Point
where
    R: Rng + ?Sized,
    F: Fn(Point) -> bool,
{
    debug_assert!(bounds.width > 0 && bounds.height > 0);

    loop {
        let candidate = Point {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };

        if !occupied(candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Point, Snake};

    use super::{Food, place_random};

    #[test]
    fn placement_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::straight(Point::new(0, 2), 3, Direction::Right);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..200 {
            let position = place_random(&mut rng, bounds, |cell| snake.occupies(cell));
            assert!(!snake.occupies(position));
            assert!(position.is_within(bounds));
        }
    }

    #[test]
    fn placement_finds_the_single_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize {
            width: 3,
            height: 3,
        };
        let free = Point::new(2, 1);

        let food = Food::spawn(&mut rng, bounds, |cell| cell != free);

        assert_eq!(food.position, free);
    }

    #[test]
    fn placement_may_reuse_previous_food_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = GridSize {
            width: 1,
            height: 2,
        };
        let previous = Food::new(Point::new(0, 1));

        let food = Food::spawn(&mut rng, bounds, |cell| cell == Point::new(0, 0));

        assert_eq!(food, previous);
    }
}
