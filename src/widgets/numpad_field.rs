use crate::config::{FieldConfig, NumpadConfig, SizeHint, clamp_fraction};
use crate::runtime::event::{DismissReason, ValueChange, WidgetAction};
use crate::terminal::{CursorPos, KeyCode, KeyEvent, TerminalSize};
use crate::ui::span::Span;
use crate::widgets::base::WidgetBase;
use crate::widgets::popup::Popup;
use crate::widgets::traits::{DrawOutput, Drawable, InteractionResult, Interactive, RenderContext};
use unicode_width::UnicodeWidthStr;

const MIN_BOX_WIDTH: usize = 12;

/// Single-line field whose only editor is a keypad popup.
///
/// Gaining focus opens a [`Popup`]; whatever closes that popup copies the
/// keypad value into the field and drops focus again. The text changes only
/// at that point, never while a session is running.
pub struct NumpadField {
    base: WidgetBase,
    text: String,
    placeholder: Option<String>,
    size_hint: SizeHint,
    touch_switch: bool,
    focused: bool,
    popup: Option<Popup>,
}

impl NumpadField {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(id, label),
            text: String::new(),
            placeholder: None,
            size_hint: SizeHint::default(),
            touch_switch: false,
            focused: false,
            popup: None,
        }
    }

    pub fn from_config(field: &FieldConfig, config: &NumpadConfig) -> Self {
        Self::new(field.id.clone(), field.label.clone())
            .with_text(field.text.clone())
            .with_pop_size(config.pop_size())
            .with_touch_switch(config.touch_switch)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_pop_size(mut self, size_hint: SizeHint) -> Self {
        self.set_pop_size(size_hint);
        self
    }

    pub fn with_touch_switch(mut self, touch_switch: bool) -> Self {
        self.touch_switch = touch_switch;
        self
    }

    pub fn id(&self) -> &str {
        self.base.id()
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Host write. Kept as-is outside a session; a running session
    /// overwrites it when it closes.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn pop_width(&self) -> f32 {
        self.size_hint.width
    }

    pub fn pop_height(&self) -> f32 {
        self.size_hint.height
    }

    pub fn pop_size(&self) -> SizeHint {
        self.size_hint
    }

    pub fn set_pop_width(&mut self, width: f32) {
        self.size_hint.width = clamp_fraction(width);
    }

    pub fn set_pop_height(&mut self, height: f32) {
        self.size_hint.height = clamp_fraction(height);
    }

    pub fn set_pop_size(&mut self, size_hint: SizeHint) {
        self.size_hint = SizeHint::new(size_hint.width, size_hint.height);
    }

    pub fn touch_switch(&self) -> bool {
        self.touch_switch
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn set_focused(&mut self, focused: bool) -> InteractionResult {
        if focused {
            return self.open_session();
        }
        match self.popup.as_mut() {
            Some(popup) => {
                let result = popup.dismiss(DismissReason::Programmatic);
                self.absorb(result)
            }
            None => {
                self.focused = false;
                InteractionResult::ignored()
            }
        }
    }

    pub fn tap_popup(&mut self, pos: CursorPos, terminal: TerminalSize) -> InteractionResult {
        let Some(popup) = self.popup.as_mut() else {
            return InteractionResult::ignored();
        };
        let result = popup.handle_tap(pos, terminal);
        self.absorb(result)
    }

    fn open_session(&mut self) -> InteractionResult {
        if self.popup.is_some() {
            return InteractionResult::ignored();
        }
        self.focused = true;
        // Size hint is read here, so changes made between sessions apply.
        self.popup = Some(Popup::open(self.base.node_id().clone(), self.size_hint));
        InteractionResult::with_action(WidgetAction::ReleaseKeyboard)
    }

    fn absorb(&mut self, result: InteractionResult) -> InteractionResult {
        let mut out = InteractionResult {
            handled: result.handled,
            request_render: result.request_render,
            actions: Vec::new(),
        };
        for action in result.actions {
            match action {
                WidgetAction::PopupDismissed { reason, value } => {
                    out.merge(self.finish_session(reason, value));
                }
                other => out.actions.push(other),
            }
        }
        out
    }

    fn finish_session(&mut self, reason: DismissReason, value: String) -> InteractionResult {
        self.popup = None;
        self.focused = false;
        log::info!("`{}` committed {value:?} ({reason:?})", self.base.id());
        self.text.clone_from(&value);
        InteractionResult {
            handled: true,
            request_render: true,
            actions: vec![
                WidgetAction::ValueChanged {
                    change: ValueChange::new(self.base.node_id().clone(), value),
                },
                WidgetAction::ReleaseFocus {
                    target: self.base.node_id().clone(),
                },
            ],
        }
    }
}

impl Drawable for NumpadField {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let theme = &ctx.theme;
        let selected = self.base.is_selected(ctx);
        let box_width = MIN_BOX_WIDTH.max(UnicodeWidthStr::width(self.text.as_str()) + 1);

        let mut line = vec![
            Span::new(format!("{} ", self.base.focus_marker(selected))),
            Span::styled(format!("{}: ", self.base.label()), theme.label),
        ];
        let box_style = if selected || self.base.is_focused(ctx) {
            theme.field_selected
        } else {
            theme.field
        };
        match (&self.placeholder, self.text.is_empty()) {
            (Some(placeholder), true) => {
                line.push(Span::styled(pad(placeholder, box_width), theme.placeholder));
            }
            _ => line.push(Span::styled(pad(&self.text, box_width), box_style)),
        }

        DrawOutput { lines: vec![line] }
    }
}

fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("[{text}{}]", " ".repeat(width.saturating_sub(used)))
}

impl Interactive for NumpadField {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        if let Some(popup) = self.popup.as_mut() {
            let result = popup.handle_key(key);
            return self.absorb(result);
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.set_focused(true),
            _ => InteractionResult::ignored(),
        }
    }

    fn on_tap(&mut self, _pos: CursorPos) -> InteractionResult {
        self.set_focused(true)
    }

    /// End of the text inside the box. Hidden while the keypad owns input.
    fn cursor_pos(&self) -> Option<CursorPos> {
        if self.popup.is_some() {
            return None;
        }
        let prefix = format!("  {}: [", self.base.label());
        let col = UnicodeWidthStr::width(prefix.as_str())
            + UnicodeWidthStr::width(self.text.as_str());
        Some(CursorPos {
            col: col.min(u16::MAX as usize) as u16,
            row: 0,
        })
    }
}
