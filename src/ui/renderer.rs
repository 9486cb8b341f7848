use crate::app::App;
use crate::terminal::{CursorPos, TerminalSize};
use crate::ui::canvas::Canvas;
use crate::ui::span::{Span, SpanLine};
use crate::widgets::traits::{Drawable, Interactive};

const TITLE: &str = "Numeric keypad";
const BROWSE_HINT: &str = "Tab/Up/Down select, Enter or click edits, q quits";
const EDIT_HINT: &str = "0-9 . type, Backspace deletes, c clears, Enter confirms, Esc closes";

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

pub struct Renderer;

impl Renderer {
    pub fn render(app: &App, terminal_size: TerminalSize) -> RenderFrame {
        let ctx = app.render_context(terminal_size);
        let theme = &ctx.theme;
        let popup = app.open_popup();

        let mut frame = RenderFrame::default();
        frame.lines.push(vec![Span::styled(TITLE, theme.title)]);
        let hint = if popup.is_some() { EDIT_HINT } else { BROWSE_HINT };
        frame.lines.push(vec![Span::styled(hint, theme.hint)]);
        frame.lines.push(Vec::new());

        for (index, field) in app.fields().iter().enumerate() {
            if popup.is_none() && ctx.is_selected(field.id()) {
                frame.cursor = field.cursor_pos().map(|local| CursorPos {
                    col: local.col,
                    row: App::field_row(index).saturating_add(local.row),
                });
            }
            frame.lines.extend(field.draw(&ctx).lines);
        }

        if let Some(popup) = popup {
            let mut canvas = Canvas::from_lines(&frame.lines);
            canvas.draw_box(
                popup.geometry(terminal_size),
                theme.border,
                &popup.body(terminal_size, theme),
            );
            frame.lines = canvas.into_lines();
        }

        frame
    }
}
