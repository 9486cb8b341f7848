use crate::runtime::event::WidgetAction;
use crate::terminal::{CursorPos, KeyEvent, TerminalSize};
use crate::ui::span::SpanLine;
use crate::ui::theme::Theme;

// ---------------------------------------------------------------------------
// Render context & output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Node currently holding input focus (an open edit session).
    pub focused_id: Option<String>,
    /// Node under the navigation highlight.
    pub selected_id: Option<String>,
    pub terminal_size: TerminalSize,
    pub theme: Theme,
}

impl RenderContext {
    pub fn new(terminal_size: TerminalSize) -> Self {
        Self {
            focused_id: None,
            selected_id: None,
            terminal_size,
            theme: Theme::default_theme(),
        }
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_id.as_deref() == Some(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
}

// ---------------------------------------------------------------------------
// Drawable
// ---------------------------------------------------------------------------

pub trait Drawable {
    fn id(&self) -> &str;
    fn label(&self) -> &str {
        ""
    }
    fn draw(&self, ctx: &RenderContext) -> DrawOutput;
}

// ---------------------------------------------------------------------------
// InteractionResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
    pub actions: Vec<WidgetAction>,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: Vec::new(),
        }
    }

    pub fn with_action(action: WidgetAction) -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: vec![action],
        }
    }

    pub fn merge(&mut self, other: Self) {
        self.handled |= other.handled;
        self.request_render |= other.request_render;
        self.actions.extend(other.actions);
    }
}

// ---------------------------------------------------------------------------
// Interactive
// ---------------------------------------------------------------------------

pub trait Interactive {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult;

    /// `pos` is relative to the widget's own drawing origin.
    fn on_tap(&mut self, _pos: CursorPos) -> InteractionResult {
        InteractionResult::ignored()
    }

    /// Caret position relative to the widget's drawing origin, if it shows one.
    fn cursor_pos(&self) -> Option<CursorPos> {
        None
    }
}
