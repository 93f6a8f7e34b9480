use rand::Rng;
use rand::seq::SliceRandom;

use crate::Coords;
use crate::geometry::Bounds;
use crate::snake::{Direction, Snake};

/// Random draws tried before falling back to a scan of the free cells.
const MAX_FOOD_DRAWS: usize = 64;

/// Everything the game loop knows about one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub bounds: Bounds,
    pub snake: Snake,
    pub food: Coords,
    /// `None` until the player picks a direction; the snake idles in place.
    pub direction: Option<Direction>,
    pub score: u32,
    pub lost: bool,
    /// The snake filled the board, there is nowhere left to put food.
    pub won: bool,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.lost || self.won
    }
}

/// A single-segment snake in the middle of the board, idle, with food somewhere else.
pub fn new_game<R: Rng>(bounds: Bounds, rng: &mut R) -> GameState {
    let snake = Snake::new(bounds.center());
    // Bounds guarantees at least two cells, so there is always a free one here
    let food = place_food(bounds, &snake, rng).unwrap_or_else(|| bounds.center());

    GameState {
        bounds,
        snake,
        food,
        direction: None,
        score: 0,
        lost: false,
        won: false,
    }
}

/// Picks a uniformly random cell not covered by the snake, or `None` if the snake
/// covers the whole board.
pub fn place_food<R: Rng>(bounds: Bounds, snake: &Snake, rng: &mut R) -> Option<Coords> {
    if snake.len() >= bounds.area() {
        return None;
    }

    for _ in 0..MAX_FOOD_DRAWS {
        let pos = (rng.gen_range(0..bounds.width()), rng.gen_range(0..bounds.height()));
        if !snake.occupies(pos) {
            return Some(pos);
        }
    }

    // Crowded board, choose among what is left
    let free: Vec<Coords> = bounds.positions().filter(|pos| !snake.occupies(*pos)).collect();
    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_game() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds::new(100, 20).unwrap();
        let state = new_game(bounds, &mut rng);

        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), (50, 10));
        assert_eq!(state.direction, None);
        assert_eq!(state.score, 0);
        assert!(!state.lost);
        assert!(!state.won);
        assert!(bounds.contains(state.food));
    }

    #[test]
    fn test_new_game_never_puts_food_on_snake() {
        let mut rng = StdRng::seed_from_u64(42);
        for &(w, h) in &[(2, 1), (1, 2), (3, 3), (5, 5), (100, 20)] {
            let bounds = Bounds::new(w, h).unwrap();
            for _ in 0..200 {
                let state = new_game(bounds, &mut rng);
                assert!(!state.snake.occupies(state.food));
                assert!(bounds.contains(state.food));
            }
        }
    }

    #[test]
    fn test_two_cell_board_has_one_spot_for_food() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = Bounds::new(2, 1).unwrap();
        let state = new_game(bounds, &mut rng);

        assert_eq!(state.snake.head(), (1, 0));
        assert_eq!(state.food, (0, 0));
    }

    #[test]
    fn test_place_food_on_nearly_full_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = Bounds::new(3, 3).unwrap();
        let snake = Snake::from_segments(&[
            (0, 0), (1, 0), (2, 0),
            (2, 1), (1, 1), (0, 1),
            (0, 2), (1, 2),
        ]);

        for _ in 0..20 {
            assert_eq!(place_food(bounds, &snake, &mut rng), Some((2, 2)));
        }
    }

    #[test]
    fn test_place_food_on_full_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = Bounds::new(2, 1).unwrap();
        let snake = Snake::from_segments(&[(0, 0), (1, 0)]);

        assert_eq!(place_food(bounds, &snake, &mut rng), None);
    }
}
