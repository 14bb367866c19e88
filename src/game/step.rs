//! One simulation tick

use super::grid::{Cell, Direction};

/// Result of advancing the snake by one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Hit a wall or its own body
    Crashed,
    /// Moved; `snake` replaces the previous body
    Advanced { snake: Vec<Cell>, ate: bool },
}

/// Move `snake` one cell in `direction`.
///
/// `direction` must not reverse the snake onto its own neck.
pub fn step(snake: &[Cell], direction: Direction, food: Cell) -> StepOutcome {
    let Some(&head) = snake.first() else {
        return StepOutcome::Crashed;
    };
    let new_head = head.offset(direction);
    if !new_head.in_bounds() {
        return StepOutcome::Crashed;
    }

    // The tail only vacates its cell when the snake does not grow.
    let ate = new_head == food;
    let blocking = if ate {
        snake
    } else {
        &snake[..snake.len() - 1]
    };
    if blocking.contains(&new_head) {
        return StepOutcome::Crashed;
    }

    let keep = if ate { snake.len() } else { snake.len() - 1 };
    let mut next = Vec::with_capacity(keep + 1);
    next.push(new_head);
    next.extend_from_slice(&snake[..keep]);
    StepOutcome::Advanced { snake: next, ate }
}
