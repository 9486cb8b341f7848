use crate::config::SizeHint;
use crate::core::NodeId;
use crate::runtime::event::{DismissReason, WidgetAction};
use crate::terminal::{CursorPos, KeyCode, KeyEvent, TerminalSize};
use crate::ui::geometry::{Rect, centered_rect};
use crate::ui::span::SpanLine;
use crate::ui::theme::Theme;
use crate::widgets::keypad::{KeypadLayout, KeypadPanel};
use crate::widgets::traits::{InteractionResult, Interactive};

/// Modal session around one [`KeypadPanel`].
///
/// Created when the owning field gains focus and dropped once dismissed. The
/// panel never reaches back into the popup: it returns
/// [`WidgetAction::RequestClose`] and the popup turns that into its single
/// [`WidgetAction::PopupDismissed`].
pub struct Popup {
    owner: NodeId,
    size_hint: SizeHint,
    panel: KeypadPanel,
    dismissed: bool,
}

impl Popup {
    pub fn open(owner: NodeId, size_hint: SizeHint) -> Self {
        log::debug!(
            "popup for `{owner}` opened at {:.2}x{:.2}",
            size_hint.width,
            size_hint.height
        );
        Self {
            owner,
            size_hint,
            panel: KeypadPanel::new(),
            dismissed: false,
        }
    }

    pub fn owner(&self) -> &NodeId {
        &self.owner
    }

    pub fn size_hint(&self) -> SizeHint {
        self.size_hint
    }

    pub fn panel(&self) -> &KeypadPanel {
        &self.panel
    }

    pub fn is_open(&self) -> bool {
        !self.dismissed
    }

    pub fn geometry(&self, terminal: TerminalSize) -> Rect {
        centered_rect(self.size_hint, terminal)
    }

    pub fn content_layout(&self, terminal: TerminalSize) -> KeypadLayout {
        let inner = self.geometry(terminal).inner();
        KeypadLayout::new(inner.width, inner.height)
    }

    /// Body lines for the inside of the box.
    pub fn body(&self, terminal: TerminalSize, theme: &Theme) -> Vec<SpanLine> {
        self.panel
            .draw_in(self.content_layout(terminal), theme, self.is_open())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InteractionResult {
        if self.dismissed {
            return InteractionResult::ignored();
        }
        if key.code == KeyCode::Esc {
            return self.dismiss(DismissReason::Cancelled);
        }
        let result = self.panel.on_key(key);
        self.absorb(result)
    }

    /// `pos` is in terminal coordinates.
    pub fn handle_tap(&mut self, pos: CursorPos, terminal: TerminalSize) -> InteractionResult {
        if self.dismissed {
            return InteractionResult::ignored();
        }
        let frame = self.geometry(terminal);
        if !frame.contains(pos) {
            return self.dismiss(DismissReason::Outside);
        }
        let Some(local) = frame.inner().local(pos) else {
            // Border tap.
            return InteractionResult::handled();
        };
        let result = self.panel.press_at(self.content_layout(terminal), local);
        self.absorb(result)
    }

    /// Closes with the panel's current value. Only the first call has an
    /// effect; later calls are ignored.
    pub fn dismiss(&mut self, reason: DismissReason) -> InteractionResult {
        let value = self.panel.value().to_string();
        self.close_with(reason, value)
    }

    fn absorb(&mut self, result: InteractionResult) -> InteractionResult {
        let mut out = InteractionResult {
            handled: result.handled,
            request_render: result.request_render,
            actions: Vec::new(),
        };
        for action in result.actions {
            match action {
                WidgetAction::RequestClose { reason, value } => {
                    out.merge(self.close_with(reason, value));
                }
                other => out.actions.push(other),
            }
        }
        out
    }

    fn close_with(&mut self, reason: DismissReason, value: String) -> InteractionResult {
        if self.dismissed {
            return InteractionResult::ignored();
        }
        self.dismissed = true;
        log::debug!("popup for `{}` dismissed: {reason:?}", self.owner);
        InteractionResult::with_action(WidgetAction::PopupDismissed { reason, value })
    }
}
