//! Grid cells, directions and food placement

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{COLS, INITIAL_SNAKE_LENGTH, ROWS};

/// A cell on the 24x24 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`. May lie off the board.
    pub fn offset(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(self.x + dx, self.y + dy)
    }

    pub fn in_bounds(self) -> bool {
        (0..COLS).contains(&self.x) && (0..ROWS).contains(&self.y)
    }
}

/// Direction of movement. Screen coordinates, so `Up` decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Horizontal snake centred on the board, head rightmost, meant to move right.
pub fn initial_snake() -> Vec<Cell> {
    let head = Cell::new(COLS / 2, ROWS / 2);
    (0..INITIAL_SNAKE_LENGTH as i32)
        .map(|i| Cell::new(head.x - i, head.y))
        .collect()
}

/// Pick a free cell uniformly at random by rejection sampling over the whole board.
///
/// The board must contain at least one cell outside `excluded`.
pub fn random_food<R: Rng + ?Sized>(rng: &mut R, excluded: &[Cell]) -> Cell {
    loop {
        let cell = Cell::new(rng.random_range(0..COLS), rng.random_range(0..ROWS));
        if !excluded.contains(&cell) {
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_initial_snake_is_centred_and_horizontal() {
        let snake = initial_snake();
        assert_eq!(
            snake,
            vec![Cell::new(12, 12), Cell::new(11, 12), Cell::new(10, 12)]
        );
    }

    #[test]
    fn test_opposites() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_offset_and_bounds() {
        let corner = Cell::new(0, 0);
        assert!(!corner.offset(Direction::Up).in_bounds());
        assert!(!corner.offset(Direction::Left).in_bounds());
        assert_eq!(corner.offset(Direction::Down), Cell::new(0, 1));
        assert!(!Cell::new(COLS - 1, 5).offset(Direction::Right).in_bounds());
        assert!(!Cell::new(5, ROWS - 1).offset(Direction::Down).in_bounds());
    }

    #[test]
    fn test_food_never_lands_on_excluded_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = initial_snake();
        for _ in 0..500 {
            let food = random_food(&mut rng, &snake);
            assert!(food.in_bounds());
            assert!(!snake.contains(&food));
        }
    }

    #[test]
    fn test_food_finds_the_last_free_cell() {
        let free = Cell::new(3, 17);
        let occupied: Vec<Cell> = (0..ROWS)
            .flat_map(|y| (0..COLS).map(move |x| Cell::new(x, y)))
            .filter(|c| *c != free)
            .collect();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_food(&mut rng, &occupied), free);
    }
}
