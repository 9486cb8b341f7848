mod key;
mod layout;

pub use key::KeypadKey;
pub use layout::{BAND_COUNT, KEY_ROWS, KeypadLayout, position_of};

use crate::runtime::event::{DismissReason, WidgetAction};
use crate::terminal::{CursorPos, KeyCode, KeyEvent};
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use crate::widgets::traits::{InteractionResult, Interactive};
use unicode_width::UnicodeWidthStr;

/// Digit pad with a read-only preview line.
///
/// The panel owns the Accumulated Value of one edit session. Confirm does not
/// close anything itself: it hands the committed value up as
/// [`WidgetAction::RequestClose`] and whoever hosts the panel decides.
#[derive(Debug, Default)]
pub struct KeypadPanel {
    value: String,
    preview: String,
    highlighted: (usize, usize),
}

impl KeypadPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    pub fn preview(&self) -> &str {
        self.preview.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn highlighted_key(&self) -> KeypadKey {
        let (row, col) = self.highlighted;
        KEY_ROWS[row][col]
    }

    pub fn press(&mut self, key: KeypadKey) -> InteractionResult {
        let mut result = InteractionResult::handled();
        match key {
            KeypadKey::Digit(_) | KeypadKey::Point => {
                if let Some(ch) = key.text() {
                    self.value.push(ch);
                }
            }
            KeypadKey::Backspace => {
                self.value.pop();
            }
            KeypadKey::Clear => self.value.clear(),
            KeypadKey::Confirm => {
                let committed = std::mem::take(&mut self.value);
                result.actions.push(WidgetAction::RequestClose {
                    reason: DismissReason::Confirmed,
                    value: committed,
                });
            }
        }
        self.sync_preview();
        result
    }

    pub fn press_at(&mut self, layout: KeypadLayout, pos: CursorPos) -> InteractionResult {
        let Some(key) = layout.key_at(pos) else {
            return InteractionResult::ignored();
        };
        if let Some(position) = position_of(key) {
            self.highlighted = position;
        }
        self.press(key)
    }

    fn sync_preview(&mut self) {
        self.preview.clone_from(&self.value);
    }

    fn move_highlight(&mut self, code: KeyCode) -> bool {
        let (row, col) = self.highlighted;
        let next = match code {
            KeyCode::Up if row > 0 => (row - 1, col),
            KeyCode::Down if row + 1 < KEY_ROWS.len() => (row + 1, col),
            KeyCode::Left if col > 0 => (row, col - 1),
            KeyCode::Right if col + 1 < KEY_ROWS[row].len() => (row, col + 1),
            _ => return false,
        };
        let last_col = KEY_ROWS[next.0].len() - 1;
        self.highlighted = (next.0, next.1.min(last_col));
        true
    }

    pub fn draw_in(&self, layout: KeypadLayout, theme: &Theme, focused: bool) -> Vec<SpanLine> {
        (0..layout.height())
            .map(|line| {
                let band = layout.band_of_line(line);
                let show_text = layout.label_line(band) == Some(line);
                if band == 0 {
                    return self.preview_line(layout.width(), theme, show_text);
                }
                self.key_line(layout, band - 1, theme, focused, show_text)
            })
            .collect()
    }

    fn preview_line(&self, width: u16, theme: &Theme, show_text: bool) -> SpanLine {
        let width = width as usize;
        if !show_text {
            return vec![Span::new(" ".repeat(width))];
        }
        // Keep the tail visible when the value outgrows the preview.
        let mut text = self.preview.as_str();
        while UnicodeWidthStr::width(text) > width {
            let mut chars = text.chars();
            chars.next();
            text = chars.as_str();
        }
        let pad = width.saturating_sub(UnicodeWidthStr::width(text));
        vec![
            Span::new(" ".repeat(pad)),
            Span::styled(text.to_string(), theme.preview),
        ]
    }

    fn key_line(
        &self,
        layout: KeypadLayout,
        row: usize,
        theme: &Theme,
        focused: bool,
        show_text: bool,
    ) -> SpanLine {
        let keys = KEY_ROWS[row];
        keys.iter()
            .enumerate()
            .map(|(col, key)| {
                let cells = layout.cell_columns(col, keys.len());
                let cell_width = (cells.end - cells.start) as usize;
                let style = if focused && self.highlighted == (row, col) {
                    theme.key_highlighted
                } else if key.is_control() {
                    theme.key_control
                } else {
                    theme.key
                };
                let text = if show_text {
                    center(key.label(), cell_width)
                } else {
                    " ".repeat(cell_width)
                };
                Span::styled(text, style)
            })
            .collect()
    }
}

fn center(label: &str, width: usize) -> String {
    let label_width = UnicodeWidthStr::width(label);
    if label_width >= width {
        return label.chars().take(width).collect();
    }
    let left = (width - label_width) / 2;
    let right = width - label_width - left;
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(right))
}

impl Interactive for KeypadPanel {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        if let Some(pad_key) = KeypadKey::from_key_event(key) {
            return self.press(pad_key);
        }
        match key.code {
            KeyCode::Char(' ') => self.press(self.highlighted_key()),
            code => {
                if self.move_highlight(code) {
                    InteractionResult::handled()
                } else {
                    InteractionResult::ignored()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(panel: &mut KeypadPanel, keys: &[KeypadKey]) {
        for key in keys {
            panel.press(*key);
            assert_eq!(panel.preview(), panel.value());
        }
    }

    fn typed(text: &str) -> KeypadPanel {
        let mut panel = KeypadPanel::new();
        for ch in text.chars() {
            let key = match ch {
                '.' => KeypadKey::Point,
                d => KeypadKey::digit(d.to_digit(10).expect("digit") as u8).expect("digit"),
            };
            panel.press(key);
        }
        panel
    }

    #[test]
    fn digits_and_point_concatenate_in_order() {
        let mut panel = KeypadPanel::new();
        press_all(
            &mut panel,
            &[
                KeypadKey::Digit(1),
                KeypadKey::Digit(2),
                KeypadKey::Point,
                KeypadKey::Digit(5),
            ],
        );
        assert_eq!(panel.value(), "12.5");
        assert_eq!(panel.preview(), "12.5");
    }

    #[test]
    fn value_and_preview_track_every_entry_sequence() {
        let entry_keys: Vec<KeypadKey> = (0u8..10)
            .filter_map(KeypadKey::digit)
            .chain([KeypadKey::Point])
            .collect();
        let mut seed: u32 = 0x2545_f491;
        let mut next = || {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (seed >> 16) as usize
        };

        for _ in 0..300 {
            let mut panel = KeypadPanel::new();
            let mut expected = String::new();
            let len = next() % 16;
            for _ in 0..len {
                let key = entry_keys[next() % entry_keys.len()];
                panel.press(key);
                expected.push_str(key.label());
                assert_eq!(panel.value(), expected);
                assert_eq!(panel.preview(), panel.value());
            }
        }
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut panel = typed("12.5");
        panel.press(KeypadKey::Backspace);
        assert_eq!(panel.value(), "12.");
        assert_eq!(panel.preview(), "12.");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut panel = KeypadPanel::new();
        let result = panel.press(KeypadKey::Backspace);
        assert!(result.handled);
        assert!(result.actions.is_empty());
        assert_eq!(panel.value(), "");
        assert!(panel.is_empty());
    }

    #[test]
    fn clear_empties_unconditionally() {
        let mut panel = typed("907.1");
        panel.press(KeypadKey::Clear);
        assert_eq!(panel.value(), "");
        assert_eq!(panel.preview(), "");
        panel.press(KeypadKey::Clear);
        assert_eq!(panel.value(), "");
    }

    #[test]
    fn confirm_hands_over_value_and_resets() {
        let mut panel = typed("12.5");
        let result = panel.press(KeypadKey::Confirm);
        assert_eq!(
            result.actions,
            vec![WidgetAction::RequestClose {
                reason: DismissReason::Confirmed,
                value: "12.5".to_string(),
            }]
        );
        assert_eq!(panel.value(), "");
        assert_eq!(panel.preview(), "");
    }

    #[test]
    fn second_confirm_commits_empty_value() {
        let mut panel = typed("3");
        panel.press(KeypadKey::Confirm);
        let result = panel.press(KeypadKey::Confirm);
        assert_eq!(
            result.actions,
            vec![WidgetAction::RequestClose {
                reason: DismissReason::Confirmed,
                value: String::new(),
            }]
        );
        assert_eq!(panel.value(), "");
    }

    #[test]
    fn repeated_digits_stay_digits() {
        let mut panel = typed("0000");
        panel.press(KeypadKey::Digit(0));
        assert_eq!(panel.value(), "00000");
    }

    #[test]
    fn keyboard_shortcuts_drive_the_pad() {
        let mut panel = KeypadPanel::new();
        for code in [
            KeyCode::Char('4'),
            KeyCode::Char(','),
            KeyCode::Char('2'),
            KeyCode::Backspace,
            KeyCode::Char('5'),
        ] {
            panel.on_key(KeyEvent::plain(code));
        }
        assert_eq!(panel.value(), "4.5");
        panel.on_key(KeyEvent::plain(KeyCode::Char('c')));
        assert_eq!(panel.value(), "");
    }

    #[test]
    fn arrows_move_highlight_and_space_presses_it() {
        let mut panel = KeypadPanel::new();
        assert_eq!(panel.highlighted_key(), KeypadKey::Digit(7));
        panel.on_key(KeyEvent::plain(KeyCode::Right));
        panel.on_key(KeyEvent::plain(KeyCode::Right));
        panel.on_key(KeyEvent::plain(KeyCode::Right));
        assert_eq!(panel.highlighted_key(), KeypadKey::Digit(9));
        for _ in 0..4 {
            panel.on_key(KeyEvent::plain(KeyCode::Down));
        }
        assert_eq!(panel.highlighted_key(), KeypadKey::Confirm);
        panel.on_key(KeyEvent::plain(KeyCode::Up));
        assert_eq!(panel.highlighted_key(), KeypadKey::Digit(0));
        panel.on_key(KeyEvent::plain(KeyCode::Char(' ')));
        assert_eq!(panel.value(), "0");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut panel = KeypadPanel::new();
        let result = panel.on_key(KeyEvent::plain(KeyCode::Tab));
        assert!(!result.handled);
    }

    #[test]
    fn taps_press_the_key_under_them() {
        let mut panel = KeypadPanel::new();
        let layout = KeypadLayout::new(9, 6);
        panel.press_at(layout, CursorPos { col: 0, row: 3 });
        panel.press_at(layout, CursorPos { col: 8, row: 4 });
        assert_eq!(panel.value(), "1.");
        assert_eq!(panel.highlighted_key(), KeypadKey::Point);
        let miss = panel.press_at(layout, CursorPos { col: 4, row: 0 });
        assert!(!miss.handled);
    }

    #[test]
    fn drawn_lines_fill_the_layout() {
        let panel = typed("12.5");
        let layout = KeypadLayout::new(12, 6);
        let lines = panel.draw_in(layout, &Theme::default_theme(), true);
        assert_eq!(lines.len(), 6);
        let text = |line: &SpanLine| line.iter().map(|s| s.text.as_str()).collect::<String>();
        assert_eq!(text(&lines[0]), "        12.5");
        assert_eq!(text(&lines[1]), " 7   8   9  ");
        assert_eq!(text(&lines[5]), "  AC    OK  ");
        for line in &lines {
            assert_eq!(UnicodeWidthStr::width(text(line).as_str()), 12);
        }
    }

    #[test]
    fn preview_keeps_the_tail_of_long_values() {
        let panel = typed("123456789");
        let lines = panel.draw_in(KeypadLayout::new(4, 6), &Theme::default_theme(), false);
        let preview: String = lines[0].iter().map(|s| s.text.as_str()).collect();
        assert_eq!(preview, "6789");
    }
}
