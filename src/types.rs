//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Driver loop tick length (milliseconds)
pub const TICK_MS: u32 = 16;

/// Scrolling view: rows visible at once, and when/where the window follows
/// the active piece (inert while the board is only 20 rows tall).
pub const VIEW_ROWS: u8 = 30;
pub const SCROLL_TRIGGER_ROW: i8 = 25;
pub const SCROLL_MARGIN_ROWS: i8 = 20;

/// Gravity cadence: frames between drop steps at 60 FPS, by level.
pub const GRAVITY_BASE_FRAMES: u32 = 50;
pub const GRAVITY_FRAMES_PER_LEVEL: u32 = 3;
pub const GRAVITY_MIN_FRAMES: u32 = 10;

/// Scoring
pub const LINE_POINTS: u32 = 100;
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All seven variants, in a fixed order usable for uniform draws.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Block colors, drawn independently of the piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
    ];

    /// Stable 1-based identifier, 0 is reserved for "empty" in flat grids.
    pub fn id(&self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Green => 2,
            Color::Blue => 3,
            Color::Yellow => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Blue),
            4 => Some(Color::Yellow),
            5 => Some(Color::Magenta),
            6 => Some(Color::Cyan),
            _ => None,
        }
    }

    /// Bright RGB value used by the renderer.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Red => (255, 50, 50),
            Color::Green => (50, 255, 50),
            Color::Blue => (50, 50, 255),
            Color::Yellow => (255, 255, 50),
            Color::Magenta => (255, 50, 255),
            Color::Cyan => (50, 255, 255),
        }
    }
}

/// Cell on the board (None = empty, Some = locked block color)
pub type Cell = Option<Color>;

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Reset,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_kind_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_str("x"), None);
    }

    #[test]
    fn test_color_ids_are_one_based_and_distinct() {
        let mut seen = [false; 7];
        for color in Color::ALL {
            let id = color.id();
            assert!(id >= 1 && id <= 6);
            assert!(!seen[id as usize], "duplicate id {}", id);
            seen[id as usize] = true;
            assert_eq!(Color::from_id(id), Some(color));
        }
        assert_eq!(Color::from_id(0), None);
        assert_eq!(Color::from_id(7), None);
    }
}
