//! Game state module - manages the complete game state
//!
//! Ties together board, pieces, piece source, and scoring. All mutators are
//! silent no-ops when the requested change collides; nothing here returns an
//! error. Game over is terminal until `reset`.

use arrayvec::ArrayVec;

use crate::core::pieces::{spawn_shape, RotationPolicy, Shape};
use crate::core::rng::{PieceSource, RandomPieces};
use crate::core::scoring::{level_for_lines, line_clear_score};
use crate::core::Board;
use crate::types::{
    Color, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SCROLL_MARGIN_ROWS,
    SCROLL_TRIGGER_ROW, VIEW_ROWS,
};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A fresh piece at the spawn position: horizontally centered, top row 0.
    pub fn spawn(kind: PieceKind, color: Color) -> Self {
        let shape = spawn_shape(kind);
        let x = BOARD_WIDTH as i8 / 2 - shape.cols() as i8 / 2;
        Self {
            shape,
            color,
            x,
            y: 0,
        }
    }

    /// Occupied cells in board coordinates.
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for &(dx, dy) in self.shape.cells().iter() {
            let _ = out.try_push((self.x + dx, self.y + dy));
        }
        out
    }
}

/// Complete game state
pub struct GameState {
    board: Board,
    active: Piece,
    /// Row the active piece would land on if dropped straight down.
    ghost_y: i8,
    score: u32,
    level: u32,
    lines: u32,
    game_over: bool,
    /// Top visible row for partial-board rendering.
    scroll_offset: u8,
    rotation_policy: RotationPolicy,
    pieces: Box<dyn PieceSource>,
}

impl GameState {
    /// Create a new game with uniform random pieces from the given seed.
    pub fn new(seed: u32) -> Self {
        Self::with_source(Box::new(RandomPieces::new(seed)))
    }

    /// Create a new game drawing from an injected piece source.
    pub fn with_source(mut pieces: Box<dyn PieceSource>) -> Self {
        let draw = pieces.next_piece();
        let active = Piece::spawn(draw.kind, draw.color);
        let mut state = Self {
            board: Board::new(),
            active,
            ghost_y: 0,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
            scroll_offset: 0,
            rotation_policy: RotationPolicy::default(),
            pieces,
        };
        state.ghost_y = state.compute_ghost_y();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn ghost_y(&self) -> i8 {
        self.ghost_y
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn scroll_offset(&self) -> u8 {
        self.scroll_offset
    }

    pub fn set_rotation_policy(&mut self, policy: RotationPolicy) {
        self.rotation_policy = policy;
    }

    /// Draw the next piece and place it at spawn.
    ///
    /// If the spawn position already overlaps locked blocks the game is over;
    /// the piece stays in place (it is still drawn) and no further moves
    /// apply until `reset`.
    pub fn spawn_next_piece(&mut self) {
        let draw = self.pieces.next_piece();
        self.active = Piece::spawn(draw.kind, draw.color);
        self.ghost_y = self.compute_ghost_y();
        if self
            .board
            .collides(self.active.x, self.active.y, &self.active.shape)
        {
            self.game_over = true;
        }
    }

    /// Landing row for the active piece: the lowest y reachable by repeated
    /// one-row-down steps from its current position.
    fn compute_ghost_y(&self) -> i8 {
        let mut ghost = self.active.y;
        while !self.board.collides(self.active.x, ghost + 1, &self.active.shape) {
            ghost += 1;
        }
        ghost
    }

    /// Shift the active piece horizontally by dx (-1 or +1).
    ///
    /// Rejected shifts leave piece and ghost untouched.
    pub fn move_piece(&mut self, dx: i8) -> bool {
        debug_assert!(dx == -1 || dx == 1, "move_piece takes dx of -1 or +1");
        if self.game_over {
            return false;
        }
        if self
            .board
            .collides(self.active.x + dx, self.active.y, &self.active.shape)
        {
            return false;
        }
        self.active.x += dx;
        self.ghost_y = self.compute_ghost_y();
        true
    }

    /// Rotate the active piece clockwise.
    ///
    /// The rotated matrix is placed per the rotation policy (naive by
    /// default: anchor fixed, no kicks). Rejected rotations change nothing.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let rotated = self.active.shape.rotated_cw();
        for &dx in self.rotation_policy.offsets() {
            if !self
                .board
                .collides(self.active.x + dx, self.active.y, &rotated)
            {
                self.active.shape = rotated;
                self.active.x += dx;
                self.ghost_y = self.compute_ghost_y();
                return true;
            }
        }
        false
    }

    /// Advance the active piece one row down.
    ///
    /// Returns true while the piece is still falling. When the step is
    /// blocked the piece locks, full rows clear, the next piece spawns, and
    /// this returns false. This is the only path that locks a piece; hard
    /// drop is this call repeated until it returns false.
    pub fn soft_drop_step(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if !self
            .board
            .collides(self.active.x, self.active.y + 1, &self.active.shape)
        {
            self.active.y += 1;
            self.ghost_y = self.compute_ghost_y();
            self.update_scroll();
            return true;
        }

        self.lock_and_clear();
        self.spawn_next_piece();
        self.update_scroll();
        false
    }

    /// Write the active piece into the board, then clear full rows and
    /// update score/lines/level.
    ///
    /// Score uses the level from before this pass's leveling update.
    fn lock_and_clear(&mut self) {
        self.board.write_shape(
            self.active.x,
            self.active.y,
            &self.active.shape,
            self.active.color,
        );

        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.score += line_clear_score(cleared, self.level);
            self.lines += cleared;
            self.level = level_for_lines(self.lines);
        }
    }

    /// Reinitialize to a fresh game and spawn a new piece.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.game_over = false;
        self.scroll_offset = 0;
        self.spawn_next_piece();
    }

    /// Follow the active piece with the visible window once it falls deep
    /// enough. Inert on boards no taller than the window.
    fn update_scroll(&mut self) {
        self.scroll_offset = if self.active.y >= SCROLL_TRIGGER_ROW {
            let max_offset = (BOARD_HEIGHT as i8 - VIEW_ROWS as i8).max(0);
            (self.active.y - SCROLL_MARGIN_ROWS).clamp(0, max_offset) as u8
        } else {
            0
        };
    }

    /// Apply a game action. Returns whether the action changed anything.
    ///
    /// While game over, only `Reset` applies.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over && action != GameAction::Reset {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => {
                self.soft_drop_step();
                true
            }
            GameAction::HardDrop => {
                while self.soft_drop_step() {}
                true
            }
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut crate::core::snapshot::GameSnapshot) {
        use crate::core::snapshot::ActiveSnapshot;

        self.board.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot::from(&self.active);
        out.ghost_y = self.ghost_y;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.game_over;
        out.scroll_offset = self.scroll_offset;
    }

    pub fn snapshot(&self) -> crate::core::snapshot::GameSnapshot {
        let mut s = crate::core::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
