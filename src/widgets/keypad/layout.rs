use super::key::KeypadKey;
use crate::terminal::CursorPos;
use std::ops::Range;

use KeypadKey::{Backspace, Clear, Confirm, Digit, Point};

/// Button rows below the preview, top to bottom.
pub const KEY_ROWS: [&[KeypadKey]; 5] = [
    &[Digit(7), Digit(8), Digit(9)],
    &[Digit(4), Digit(5), Digit(6)],
    &[Digit(1), Digit(2), Digit(3)],
    &[Backspace, Digit(0), Point],
    &[Clear, Confirm],
];

/// Preview band plus one band per key row.
pub const BAND_COUNT: usize = KEY_ROWS.len() + 1;

/// Proportional split of a content area into horizontal bands and, inside
/// each key band, equal-width cells. Drawing and hit-testing both go through
/// this so a tap always lands on the key that was painted there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadLayout {
    width: u16,
    height: u16,
}

impl KeypadLayout {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn band_of_line(&self, line: u16) -> usize {
        line as usize * BAND_COUNT / self.height as usize
    }

    pub fn band_lines(&self, band: usize) -> Range<u16> {
        split_range(band, BAND_COUNT, self.height)
    }

    /// Line on which a band's text sits; `None` when the band got no lines.
    pub fn label_line(&self, band: usize) -> Option<u16> {
        let lines = self.band_lines(band);
        if lines.is_empty() {
            return None;
        }
        Some(lines.start + (lines.end - lines.start - 1) / 2)
    }

    pub fn cell_columns(&self, index: usize, count: usize) -> Range<u16> {
        split_range(index, count, self.width)
    }

    pub fn key_at(&self, pos: CursorPos) -> Option<KeypadKey> {
        if pos.col >= self.width || pos.row >= self.height {
            return None;
        }
        let band = self.band_of_line(pos.row);
        let row = KEY_ROWS.get(band.checked_sub(1)?)?;
        let index = pos.col as usize * row.len() / self.width as usize;
        row.get(index).copied()
    }
}

/// Grid coordinates (row, column) of a key inside [`KEY_ROWS`].
pub fn position_of(key: KeypadKey) -> Option<(usize, usize)> {
    KEY_ROWS.iter().enumerate().find_map(|(row, keys)| {
        keys.iter()
            .position(|candidate| *candidate == key)
            .map(|col| (row, col))
    })
}

fn split_range(index: usize, count: usize, total: u16) -> Range<u16> {
    let total = total as usize;
    let start = (index * total).div_ceil(count);
    let end = ((index + 1) * total).div_ceil(count);
    (start.min(total) as u16)..(end.min(total) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(col: u16, row: u16) -> CursorPos {
        CursorPos { col, row }
    }

    #[test]
    fn bands_cover_every_line_exactly_once() {
        for height in [6u16, 7, 11, 18, 23] {
            let layout = KeypadLayout::new(12, height);
            let mut covered = 0u16;
            for band in 0..BAND_COUNT {
                let lines = layout.band_lines(band);
                for line in lines.clone() {
                    assert_eq!(layout.band_of_line(line), band, "height {height}");
                }
                covered += lines.end - lines.start;
            }
            assert_eq!(covered, height);
        }
    }

    #[test]
    fn six_lines_give_one_line_per_band() {
        let layout = KeypadLayout::new(9, 6);
        assert_eq!(layout.key_at(at(0, 0)), None);
        assert_eq!(layout.key_at(at(0, 1)), Some(Digit(7)));
        assert_eq!(layout.key_at(at(8, 1)), Some(Digit(9)));
        assert_eq!(layout.key_at(at(4, 3)), Some(Digit(2)));
        assert_eq!(layout.key_at(at(0, 4)), Some(Backspace));
        assert_eq!(layout.key_at(at(8, 4)), Some(Point));
        assert_eq!(layout.key_at(at(3, 5)), Some(Clear));
        assert_eq!(layout.key_at(at(5, 5)), Some(Confirm));
    }

    #[test]
    fn taps_outside_the_area_miss() {
        let layout = KeypadLayout::new(9, 6);
        assert_eq!(layout.key_at(at(9, 2)), None);
        assert_eq!(layout.key_at(at(2, 6)), None);
    }

    #[test]
    fn label_lines_sit_inside_their_band() {
        let layout = KeypadLayout::new(20, 18);
        for band in 0..BAND_COUNT {
            let line = layout.label_line(band).expect("band has lines");
            assert!(layout.band_lines(band).contains(&line));
        }
        assert_eq!(KeypadLayout::new(5, 3).label_line(1), None);
    }

    #[test]
    fn cell_columns_are_contiguous() {
        let layout = KeypadLayout::new(10, 6);
        assert_eq!(layout.cell_columns(0, 3), 0..4);
        assert_eq!(layout.cell_columns(1, 3), 4..7);
        assert_eq!(layout.cell_columns(2, 3), 7..10);
        assert_eq!(layout.cell_columns(1, 2), 5..10);
    }

    #[test]
    fn positions_follow_the_grid() {
        assert_eq!(position_of(Digit(7)), Some((0, 0)));
        assert_eq!(position_of(Digit(0)), Some((3, 1)));
        assert_eq!(position_of(Confirm), Some((4, 1)));
        assert_eq!(position_of(Digit(42)), None);
    }
}
