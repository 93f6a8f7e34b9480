use crate::{Coords, TermInt};
use crate::config::ConfigError;
use crate::snake::Direction::{self, *};

/// Returns true if `target` is one of `coords`.
pub fn contains<'a, I>(coords: I, target: Coords) -> bool
where
    I: IntoIterator<Item = &'a Coords>,
{
    coords.into_iter().any(|pos| *pos == target)
}

/// Size of the playing field. Valid positions are `[0, width) x [0, height)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    width: TermInt,
    height: TermInt,
}

impl Bounds {
    /// A board needs room for at least the snake and one piece of food.
    pub fn new(width: TermInt, height: TermInt) -> Result<Self, ConfigError> {
        if (width as usize) * (height as usize) < 2 {
            return Err(ConfigError::BoardTooSmall { width, height });
        }

        Ok(Bounds { width, height })
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    pub fn contains(&self, pos: Coords) -> bool {
        pos.0 < self.width && pos.1 < self.height
    }

    /// The neighbour of `pos` in `direction`, or `None` if it falls off the board.
    pub fn step(&self, pos: Coords, direction: Direction) -> Option<Coords> {
        let (x, y) = pos;
        let next = match direction {
            Up => (x, y.checked_sub(1)?),
            Down => (x, y.checked_add(1)?),
            Left => (x.checked_sub(1)?, y),
            Right => (x.checked_add(1)?, y),
        };

        Some(next).filter(|p| self.contains(*p))
    }

    /// Every position on the board, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Coords> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let coords = vec![(2, 2), (1, 2), (0, 2)];
        assert!(contains(&coords, (1, 2)));
        assert!(!contains(&coords, (2, 1)));
        assert!(!contains(&Vec::new(), (0, 0)));
    }

    #[test]
    fn test_bounds_rejects_tiny_boards() {
        assert!(Bounds::new(0, 10).is_err());
        assert!(Bounds::new(10, 0).is_err());
        assert!(Bounds::new(1, 1).is_err());
        assert!(Bounds::new(2, 1).is_ok());
    }

    #[test]
    fn test_center_uses_integer_division() {
        let bounds = Bounds::new(5, 4).unwrap();
        assert_eq!(bounds.center(), (2, 2));
        assert_eq!(Bounds::new(100, 20).unwrap().center(), (50, 10));
    }

    #[test]
    fn test_step_stays_on_board() {
        let bounds = Bounds::new(5, 5).unwrap();
        assert_eq!(bounds.step((2, 2), Up), Some((2, 1)));
        assert_eq!(bounds.step((2, 2), Down), Some((2, 3)));
        assert_eq!(bounds.step((2, 2), Left), Some((1, 2)));
        assert_eq!(bounds.step((2, 2), Right), Some((3, 2)));

        assert_eq!(bounds.step((0, 2), Left), None);
        assert_eq!(bounds.step((2, 0), Up), None);
        assert_eq!(bounds.step((4, 2), Right), None);
        assert_eq!(bounds.step((2, 4), Down), None);
    }

    #[test]
    fn test_positions_cover_board() {
        let bounds = Bounds::new(3, 2).unwrap();
        let all: Vec<Coords> = bounds.positions().collect();
        assert_eq!(all, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }
}
