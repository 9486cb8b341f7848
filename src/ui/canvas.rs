use crate::ui::geometry::Rect;
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::Style;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    style: Style,
    /// Trailing column of a double-width glyph.
    continuation: bool,
}

impl Cell {
    fn blank() -> Self {
        Self::plain(' ', Style::default())
    }

    fn plain(ch: char, style: Style) -> Self {
        Self {
            ch,
            style,
            continuation: false,
        }
    }
}

/// Cell grid used to stamp a floating box over already composed lines.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    rows: Vec<Vec<Cell>>,
}

impl Canvas {
    pub fn from_lines(lines: &[SpanLine]) -> Self {
        Self {
            rows: lines.iter().map(|line| line_to_cells(line)).collect(),
        }
    }

    /// Writes `line` into `width` columns starting at (`row`, `col`), padding
    /// or truncating as needed.
    pub fn paint(&mut self, row: usize, col: usize, width: usize, line: &[Span]) {
        if width == 0 {
            return;
        }
        while self.rows.len() <= row {
            self.rows.push(Vec::new());
        }
        let target = &mut self.rows[row];
        let end = col + width;
        if target.len() < end {
            target.resize(end, Cell::blank());
        }

        // Never leave half of a wide glyph behind on either edge.
        if target[col].continuation && col > 0 {
            target[col - 1] = Cell::blank();
        }
        if target.get(end).is_some_and(|cell| cell.continuation) {
            target[end] = Cell::blank();
        }

        let patch = fit_to_width(&line_to_cells(line), width);
        target[col..end].copy_from_slice(&patch);
    }

    pub fn draw_box(&mut self, rect: Rect, border: Style, body: &[SpanLine]) {
        let (row, col) = (rect.row as usize, rect.col as usize);
        let (width, height) = (rect.width as usize, rect.height as usize);
        if width < 2 || height < 2 {
            return;
        }
        let inner = width - 2;

        self.paint(row, col, width, &[border_span('┌', '─', '┐', inner, border)]);
        for offset in 0..height - 2 {
            let target = row + 1 + offset;
            let line = body.get(offset).map(Vec::as_slice).unwrap_or(&[]);
            self.paint(target, col, 1, &[Span::styled("│", border)]);
            self.paint(target, col + 1, inner, line);
            self.paint(target, col + 1 + inner, 1, &[Span::styled("│", border)]);
        }
        self.paint(
            row + height - 1,
            col,
            width,
            &[border_span('└', '─', '┘', inner, border)],
        );
    }

    pub fn into_lines(self) -> Vec<SpanLine> {
        self.rows.iter().map(|row| cells_to_line(row)).collect()
    }
}

fn border_span(left: char, fill: char, right: char, inner: usize, style: Style) -> Span {
    let mut text = String::with_capacity(inner + 2);
    text.push(left);
    text.extend(std::iter::repeat_n(fill, inner));
    text.push(right);
    Span::styled(text, style)
}

fn line_to_cells(line: &[Span]) -> Vec<Cell> {
    let mut out = Vec::new();
    for span in line {
        for ch in span.text.chars() {
            let width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if width == 0 {
                continue;
            }
            out.push(Cell::plain(ch, span.style));
            for _ in 1..width {
                out.push(Cell {
                    ch: ' ',
                    style: span.style,
                    continuation: true,
                });
            }
        }
    }
    out
}

fn fit_to_width(cells: &[Cell], width: usize) -> Vec<Cell> {
    let mut out = Vec::with_capacity(width);
    let mut idx = 0;
    while idx < cells.len() {
        let glyph_len = 1 + cells[idx + 1..]
            .iter()
            .take_while(|cell| cell.continuation)
            .count();
        if out.len() + glyph_len > width {
            break;
        }
        out.extend_from_slice(&cells[idx..idx + glyph_len]);
        idx += glyph_len;
    }
    out.resize(width, Cell::blank());
    out
}

fn cells_to_line(cells: &[Cell]) -> SpanLine {
    let mut out: SpanLine = Vec::new();
    for cell in cells.iter().filter(|cell| !cell.continuation) {
        match out.last_mut() {
            Some(span) if span.style == cell.style => span.text.push(cell.ch),
            _ => out.push(Span::styled(cell.ch.to_string(), cell.style)),
        }
    }
    out
}
