use crate::config::SizeHint;
use crate::terminal::{CursorPos, TerminalSize};

/// Smallest popup that still fits the preview plus five key rows.
pub const MIN_POPUP_WIDTH: u16 = 14;
pub const MIN_POPUP_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub row: u16,
    pub col: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn contains(&self, pos: CursorPos) -> bool {
        pos.col >= self.col
            && pos.row >= self.row
            && pos.col < self.col.saturating_add(self.width)
            && pos.row < self.row.saturating_add(self.height)
    }

    /// Area inside a one-cell border.
    pub fn inner(&self) -> Rect {
        Rect {
            row: self.row.saturating_add(1),
            col: self.col.saturating_add(1),
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        }
    }

    /// `pos` relative to this rect's origin, if it lies inside.
    pub fn local(&self, pos: CursorPos) -> Option<CursorPos> {
        self.contains(pos).then(|| CursorPos {
            col: pos.col - self.col,
            row: pos.row - self.row,
        })
    }
}

/// Centers a box of `hint × terminal` cells, never smaller than the minimum
/// popup and never larger than the terminal.
pub fn centered_rect(hint: SizeHint, terminal: TerminalSize) -> Rect {
    let width = scale(terminal.width, hint.width, MIN_POPUP_WIDTH);
    let height = scale(terminal.height, hint.height, MIN_POPUP_HEIGHT);
    Rect {
        row: (terminal.height - height) / 2,
        col: (terminal.width - width) / 2,
        width,
        height,
    }
}

fn scale(total: u16, fraction: f32, min: u16) -> u16 {
    let scaled = (total as f32 * fraction).round() as u16;
    scaled.max(min).min(total)
}
