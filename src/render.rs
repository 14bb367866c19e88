//! Board drawing

use macroquad::prelude::*;

use crate::config::{BOARD_MARGIN_X, BOARD_MARGIN_Y, COLS, MAX_BOARD_PX, MIN_BOARD_PX, ROWS};
use crate::game::{Cell, RenderSnapshot};
use crate::theme::Theme;

/// Space reserved above the board for the HUD
pub const HUD_HEIGHT: f32 = 60.0;

const GLOW_RINGS: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub board: Color,
    pub head: Color,
    pub body: Color,
    pub food: Color,
    /// Per-cell outline, retro only
    pub outline: Option<Color>,
    /// Base colour of the eat glow and burst; alpha is applied per use
    pub glow: Color,
    pub text: Color,
    pub dim: Color,
    pub panel: Color,
    pub accent: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Neon => Self {
                background: Color::from_rgba(5, 7, 12, 255),
                board: Color::from_rgba(11, 14, 20, 255),
                head: Color::from_rgba(0, 245, 255, 255),
                body: Color::from_rgba(0, 170, 255, 255),
                food: Color::from_rgba(255, 59, 59, 255),
                outline: None,
                glow: Color::from_rgba(11, 191, 255, 255),
                text: Color::from_rgba(220, 240, 255, 255),
                dim: Color::from_rgba(120, 140, 160, 255),
                panel: Color::from_rgba(8, 12, 20, 220),
                accent: Color::from_rgba(0, 245, 255, 255),
            },
            Theme::Retro => Self {
                background: Color::from_rgba(6, 16, 6, 255),
                board: Color::from_rgba(13, 31, 13, 255),
                head: Color::from_rgba(183, 225, 177, 255),
                body: Color::from_rgba(131, 198, 132, 255),
                food: Color::from_rgba(229, 192, 123, 255),
                outline: Some(Color::from_rgba(42, 122, 42, 255)),
                glow: Color::from_rgba(147, 209, 143, 255),
                text: Color::from_rgba(183, 225, 177, 255),
                dim: Color::from_rgba(31, 95, 31, 255),
                panel: Color::from_rgba(10, 24, 10, 225),
                accent: Color::from_rgba(229, 192, 123, 255),
            },
        }
    }
}

fn fade(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, alpha.clamp(0.0, 1.0))
}

/// Edge length of the square board for a window of `width` x `height`:
/// the largest multiple of 24 that leaves room for the HUD, held within
/// [`MIN_BOARD_PX`, `MAX_BOARD_PX`].
pub fn board_size(width: f32, height: f32) -> f32 {
    let available = (width - BOARD_MARGIN_X).min(height - BOARD_MARGIN_Y);
    ((available / 24.0).floor() * 24.0).clamp(MIN_BOARD_PX, MAX_BOARD_PX)
}

/// Where the grid sits on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub origin: Vec2,
    pub cell: f32,
}

impl BoardLayout {
    pub fn fit(width: f32, height: f32) -> Self {
        let cell = (board_size(width, height) / COLS.max(ROWS) as f32).floor();
        let size = cell * COLS as f32;
        let spare_y = (height - BOARD_MARGIN_Y - size).max(0.0);
        Self {
            origin: vec2(((width - size) * 0.5).max(0.0), HUD_HEIGHT + spare_y * 0.5),
            cell,
        }
    }

    pub fn width(&self) -> f32 {
        self.cell * COLS as f32
    }

    pub fn height(&self) -> f32 {
        self.cell * ROWS as f32
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.width(), self.height())
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            self.origin.x + cell.x as f32 * self.cell,
            self.origin.y + cell.y as f32 * self.cell,
            self.cell,
            self.cell,
        )
    }
}

fn draw_cell(layout: &BoardLayout, cell: Cell, color: Color, outline: Option<Color>) {
    let r = layout.cell_rect(cell);
    draw_rectangle(r.x, r.y, r.w, r.h, color);
    if let Some(line) = outline {
        draw_rectangle_lines(r.x + 0.5, r.y + 0.5, r.w - 1.0, r.h - 1.0, 1.0, fade(line, color.a));
    }
}

pub fn draw_board(snapshot: &RenderSnapshot<'_>, palette: &Palette, layout: &BoardLayout) {
    let board = layout.rect();
    draw_rectangle(board.x, board.y, board.w, board.h, palette.board);
    draw_rectangle_lines(board.x - 1.0, board.y - 1.0, board.w + 2.0, board.h + 2.0, 1.0, palette.dim);

    draw_cell(layout, snapshot.food, palette.food, palette.outline);

    for (i, &segment) in snapshot.snake.iter().enumerate().rev() {
        if i == 0 {
            draw_head(layout, segment, palette, snapshot);
        } else {
            draw_cell(layout, segment, palette.body, palette.outline);
        }
    }

    if snapshot.effects.burst_power > 0.0 {
        draw_burst(layout, palette, snapshot);
    }
}

fn draw_head(layout: &BoardLayout, head: Cell, palette: &Palette, snapshot: &RenderSnapshot<'_>) {
    let fx = snapshot.effects;
    if fx.head_scale == 1.0 && fx.glow_alpha <= 0.0 {
        draw_cell(layout, head, palette.head, palette.outline);
        return;
    }

    let r = layout.cell_rect(head);
    let center = r.center();
    let size = layout.cell * fx.head_scale;
    let (x, y) = (center.x - size * 0.5, center.y - size * 0.5);
    draw_rectangle(x, y, size, size, palette.head);
    if let Some(line) = palette.outline {
        draw_rectangle_lines(x + 0.5, y + 0.5, size - 1.0, size - 1.0, 1.0, line);
    }
    if fx.glow_alpha > 0.0 {
        let thickness = (layout.cell * 0.08).max(1.0);
        draw_rectangle_lines(
            r.x - 1.0,
            r.y - 1.0,
            r.w + 2.0,
            r.h + 2.0,
            thickness,
            fade(palette.glow, fx.glow_alpha),
        );
    }
}

/// Radial glow around the head plus a fading trail continuing the neck-to-head line.
fn draw_burst(layout: &BoardLayout, palette: &Palette, snapshot: &RenderSnapshot<'_>) {
    let Some(&head) = snapshot.snake.first() else {
        return;
    };
    let power = snapshot.effects.burst_power;
    let center = layout.cell_rect(head).center();
    let inner = layout.cell * 0.2;
    let outer = layout.cell * (0.6 + 0.6 * power);

    // Stacked translucent discs approximate a radial gradient.
    let peak = 0.25 * power;
    for ring in (1..=GLOW_RINGS).rev() {
        let t = ring as f32 / GLOW_RINGS as f32;
        let radius = inner + (outer - inner) * t;
        draw_circle(center.x, center.y, radius, fade(palette.glow, peak / GLOW_RINGS as f32 * 2.0));
    }

    let Some(&neck) = snapshot.snake.get(1) else {
        return;
    };
    let (dx, dy) = (head.x - neck.x, head.y - neck.y);
    let trail = ((2.0 + 3.0 * power).floor() as i32).max(1);
    for i in 1..=trail {
        let cell = Cell::new(head.x + dx * i, head.y + dy * i);
        if !cell.in_bounds() {
            break;
        }
        let alpha = (0.25 - i as f32 * 0.07).max(0.0) * power;
        if alpha <= 0.0 {
            break;
        }
        draw_cell(layout, cell, fade(palette.head, alpha), palette.outline);
    }
}
