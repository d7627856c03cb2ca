//! GameView: maps an engine snapshot into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. Each board cell renders as a
//! 2x1 block to compensate for terminal glyph aspect ratio. The view honors
//! the snapshot's scroll offset, drawing only the visible row window.

use crate::core::snapshot::GameSnapshot;
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH, VIEW_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Board position and glyph metrics for the terminal layout.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    /// Left/top margin of the board frame.
    origin_x: u16,
    origin_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 cells compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            origin_x: 2,
            origin_y: 1,
        }
    }
}

impl GameView {
    /// Rows of the board visible at once.
    fn visible_rows(&self) -> u16 {
        (BOARD_HEIGHT as u16).min(VIEW_ROWS as u16)
    }

    /// Map a board row to a view row, if it is inside the scroll window.
    fn view_row(&self, board_y: i8, scroll_offset: u8) -> Option<u16> {
        if board_y < scroll_offset as i8 {
            return None;
        }
        let vy = (board_y - scroll_offset as i8) as u16;
        (vy < self.visible_rows()).then_some(vy)
    }

    /// Render the snapshot into the framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = BOARD_WIDTH as u16 * self.cell_w;
        let board_px_h = self.visible_rows() * self.cell_h;

        self.draw_border(fb, board_px_w, board_px_h);

        // Locked board cells inside the scroll window.
        for vy in 0..self.visible_rows() {
            let board_y = vy as usize + snap.scroll_offset as usize;
            if board_y >= BOARD_HEIGHT as usize {
                break;
            }
            for x in 0..BOARD_WIDTH as u16 {
                if let Some(color) = Color::from_id(snap.board[board_y][x as usize]) {
                    self.fill_board_cell(fb, x, vy, block_style(color));
                }
            }
        }

        if !snap.game_over {
            // Ghost piece at quarter brightness, under the active piece.
            let ghost = ghost_style(snap.active.color);
            for &(dx, dy) in snap.active.cells.iter() {
                let x = snap.active.x + dx;
                let y = snap.ghost_y + dy;
                if x < 0 || x >= BOARD_WIDTH as i8 {
                    continue;
                }
                if let Some(vy) = self.view_row(y, snap.scroll_offset) {
                    self.draw_ghost_cell(fb, x as u16, vy, ghost);
                }
            }
        }

        // Active piece (still drawn when game over, per spawn-collision rule).
        let style = block_style(snap.active.color);
        for &(dx, dy) in snap.active.cells.iter() {
            let x = snap.active.x + dx;
            let y = snap.active.y + dy;
            if x < 0 || x >= BOARD_WIDTH as i8 {
                continue;
            }
            if let Some(vy) = self.view_row(y, snap.scroll_offset) {
                self.fill_board_cell(fb, x as u16, vy, style);
            }
        }

        self.draw_panel(fb, snap, board_px_w);
    }

    fn fill_board_cell(&self, fb: &mut FrameBuffer, x: u16, vy: u16, style: CellStyle) {
        fb.fill_rect(
            self.origin_x + 1 + x * self.cell_w,
            self.origin_y + 1 + vy * self.cell_h,
            self.cell_w,
            self.cell_h,
            ' ',
            style,
        );
    }

    fn draw_ghost_cell(&self, fb: &mut FrameBuffer, x: u16, vy: u16, style: CellStyle) {
        fb.fill_rect(
            self.origin_x + 1 + x * self.cell_w,
            self.origin_y + 1 + vy * self.cell_h,
            self.cell_w,
            self.cell_h,
            '░',
            style,
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, inner_w: u16, inner_h: u16) {
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        let (x0, y0) = (self.origin_x, self.origin_y);
        let (x1, y1) = (x0 + inner_w + 1, y0 + inner_h + 1);

        for x in x0 + 1..x1 {
            fb.set(x, y0, Cell { ch: '─', style });
            fb.set(x, y1, Cell { ch: '─', style });
        }
        for y in y0 + 1..y1 {
            fb.set(x0, y, Cell { ch: '│', style });
            fb.set(x1, y, Cell { ch: '│', style });
        }
        fb.set(x0, y0, Cell { ch: '┌', style });
        fb.set(x1, y0, Cell { ch: '┐', style });
        fb.set(x0, y1, Cell { ch: '└', style });
        fb.set(x1, y1, Cell { ch: '┘', style });
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, board_px_w: u16) {
        let x = self.origin_x + board_px_w + 5;
        let mut y = self.origin_y + 1;

        let label = CellStyle {
            fg: Rgb::new(160, 160, 160),
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(255, 255, 80),
            bold: true,
            ..CellStyle::default()
        };

        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_str(x + 7, y, &v.to_string(), value);
            y += 2;
        }

        y += 1;
        fb.put_str(x, y, "CONTROLS", label);
        y += 1;
        for line in [
            "←/→ a/d  move",
            "↑ w      rotate",
            "↓ s      soft drop",
            "space    hard drop",
            "r        reset",
            "q        quit",
        ] {
            fb.put_str(x, y, line, CellStyle::default());
            y += 1;
        }

        if snap.game_over {
            let alert = CellStyle {
                fg: Rgb::new(255, 60, 60),
                bold: true,
                ..CellStyle::default()
            };
            fb.put_str(x, y + 1, "GAME OVER", alert);
        }
    }
}

fn block_style(color: Color) -> CellStyle {
    let (r, g, b) = color.rgb();
    CellStyle {
        fg: Rgb::new(0, 0, 0),
        bg: Rgb::new(r, g, b),
        bold: false,
    }
}

fn ghost_style(color: Color) -> CellStyle {
    let (r, g, b) = color.rgb();
    CellStyle {
        fg: Rgb::new(r, g, b).dimmed(4),
        ..CellStyle::default()
    }
}
