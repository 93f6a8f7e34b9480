use std::collections::VecDeque;

use crate::Coords;
use crate::geometry::contains;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

/// The snake's body, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Coords>,
}

impl Snake {
    pub fn new(pos: Coords) -> Self {
        let mut body = VecDeque::new();
        body.push_back(pos);
        Snake { body }
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn body(&self) -> impl Iterator<Item = &Coords> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        contains(&self.body, pos)
    }

    /// Moves the head to `new_head` and drops the tail. Returns the vacated tail.
    pub fn slide(&mut self, new_head: Coords) -> Coords {
        self.body.push_front(new_head);
        // The body had at least one segment before the push
        self.body.pop_back().unwrap_or(new_head)
    }

    /// Moves the head to `new_head` keeping the tail, so the snake grows by one.
    pub fn grow(&mut self, new_head: Coords) {
        self.body.push_front(new_head);
    }
}

#[cfg(test)]
impl Snake {
    pub fn from_segments(segments: &[Coords]) -> Self {
        assert!(!segments.is_empty());
        Snake { body: segments.iter().copied().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_has_one_segment() {
        let snake = Snake::new((2, 2));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), (2, 2));
    }

    #[test]
    fn test_slide_keeps_length() {
        let mut snake = Snake::from_segments(&[(2, 2), (1, 2), (0, 2)]);
        let tail = snake.slide((3, 2));

        assert_eq!(tail, (0, 2));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body().copied().collect::<Vec<_>>(), vec![(3, 2), (2, 2), (1, 2)]);
    }

    #[test]
    fn test_single_segment_slide() {
        let mut snake = Snake::new((2, 2));
        assert_eq!(snake.slide((2, 1)), (2, 2));
        assert_eq!(snake.body().copied().collect::<Vec<_>>(), vec![(2, 1)]);
    }

    #[test]
    fn test_grow_prepends_head() {
        let mut snake = Snake::new((2, 2));
        snake.grow((2, 3));

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), (2, 3));
        assert!(snake.occupies((2, 2)));
        assert!(!snake.occupies((2, 1)));
    }
}
