use crate::config::NumpadConfig;
use crate::runtime::event::WidgetAction;
use crate::terminal::{CursorPos, KeyCode, KeyEvent, KeyModifiers, TerminalSize};
use crate::widgets::numpad_field::NumpadField;
use crate::widgets::popup::Popup;
use crate::widgets::traits::{InteractionResult, Interactive, RenderContext};

/// Title, hint and a spacer sit above the first field.
pub const HEADER_ROWS: u16 = 3;

/// A column of keypad-backed fields with one navigation highlight.
///
/// At most one field is focused at a time, and a focused field always has its
/// popup open.
pub struct App {
    fields: Vec<NumpadField>,
    selected: usize,
    focused: Option<usize>,
    keyboard_released: bool,
    should_exit: bool,
}

impl App {
    pub fn new(fields: Vec<NumpadField>) -> Self {
        Self {
            fields,
            selected: 0,
            focused: None,
            keyboard_released: false,
            should_exit: false,
        }
    }

    pub fn from_config(config: &NumpadConfig) -> Self {
        let fields = config
            .fields
            .iter()
            .map(|field| NumpadField::from_config(field, config).with_placeholder("tap to enter"))
            .collect();
        Self::new(fields)
    }

    pub fn fields(&self) -> &[NumpadField] {
        self.fields.as_slice()
    }

    pub fn field(&self, id: &str) -> Option<&NumpadField> {
        self.fields.iter().find(|field| field.id() == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut NumpadField> {
        self.fields.iter_mut().find(|field| field.id() == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.fields.get(self.selected).map(NumpadField::id)
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused
            .and_then(|idx| self.fields.get(idx))
            .map(NumpadField::id)
    }

    pub fn open_popup(&self) -> Option<&Popup> {
        self.focused
            .and_then(|idx| self.fields.get(idx))
            .and_then(NumpadField::popup)
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Reports, once, that a field asked for the caret to go away.
    pub fn take_keyboard_release(&mut self) -> bool {
        std::mem::take(&mut self.keyboard_released)
    }

    pub fn render_context(&self, terminal_size: TerminalSize) -> RenderContext {
        let mut ctx = RenderContext::new(terminal_size);
        ctx.selected_id = self.selected_id().map(ToOwned::to_owned);
        ctx.focused_id = self.focused_id().map(ToOwned::to_owned);
        ctx
    }

    pub fn field_row(index: usize) -> u16 {
        HEADER_ROWS.saturating_add(index.min(u16::MAX as usize) as u16)
    }

    pub fn focus(&mut self, index: usize) -> bool {
        self.activate(index, |field| field.set_focused(true))
    }

    pub fn blur(&mut self) -> bool {
        let Some(idx) = self.focused else {
            return false;
        };
        let result = self.fields[idx].set_focused(false);
        self.apply(result)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_exit = true;
            return true;
        }
        if let Some(idx) = self.focused {
            let result = self.fields[idx].on_key(key);
            return self.apply(result);
        }
        if self.fields.is_empty() {
            return false;
        }
        let count = self.fields.len();
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.selected = (self.selected + 1) % count;
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.selected = (self.selected + count - 1) % count;
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.focus(self.selected),
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_exit = true;
                true
            }
            _ => false,
        }
    }

    pub fn handle_tap(&mut self, pos: CursorPos, terminal_size: TerminalSize) -> bool {
        if let Some(idx) = self.focused {
            let result = self.fields[idx].tap_popup(pos, terminal_size);
            return self.apply(result);
        }
        let Some(index) = pos.row.checked_sub(HEADER_ROWS).map(usize::from) else {
            return false;
        };
        if index >= self.fields.len() {
            return false;
        }
        let local = CursorPos { col: pos.col, row: 0 };
        self.activate(index, |field| field.on_tap(local))
    }

    fn activate(
        &mut self,
        index: usize,
        action: impl FnOnce(&mut NumpadField) -> InteractionResult,
    ) -> bool {
        if self.focused.is_some() || index >= self.fields.len() {
            return false;
        }
        self.selected = index;
        let result = action(&mut self.fields[index]);
        if self.fields[index].is_focused() {
            self.focused = Some(index);
        }
        self.apply(result)
    }

    fn apply(&mut self, result: InteractionResult) -> bool {
        for action in &result.actions {
            match action {
                WidgetAction::ReleaseKeyboard => self.keyboard_released = true,
                WidgetAction::ReleaseFocus { target } => {
                    if self.focused_id() == Some(target.as_str()) {
                        self.focused = None;
                    }
                }
                WidgetAction::ValueChanged { change } => {
                    log::debug!("{} = {:?}", change.target, change.value);
                }
                other => log::warn!("unexpected action reached the app: {other:?}"),
            }
        }
        result.handled || result.request_render
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERM: TerminalSize = TerminalSize {
        width: 80,
        height: 24,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::plain(code)
    }

    fn app() -> App {
        App::from_config(&NumpadConfig::default())
    }

    fn type_keys(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn enter_opens_the_selected_field() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.selected_id(), Some("quantity"));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.focused_id(), Some("quantity"));
        assert!(app.open_popup().is_some());
        assert!(app.take_keyboard_release());
        assert!(!app.take_keyboard_release());
    }

    #[test]
    fn confirm_writes_back_and_blurs() {
        let mut app = app();
        app.focus(0);
        type_keys(&mut app, "12.5");
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.field("amount").map(NumpadField::text), Some("12."));
        assert_eq!(app.focused_id(), None);
        assert!(app.open_popup().is_none());
    }

    #[test]
    fn q_types_nothing_while_popup_is_open() {
        let mut app = app();
        app.focus(0);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_exit());
        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_exit());
    }

    #[test]
    fn ctrl_c_always_exits() {
        let mut app = app();
        app.focus(1);
        app.handle_key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert!(app.should_exit());
    }

    #[test]
    fn focus_blur_focus_gives_fresh_sessions() {
        let mut app = app();
        app.focus(0);
        type_keys(&mut app, "77");
        assert!(app.blur());
        assert_eq!(app.field("amount").map(NumpadField::text), Some("77"));

        app.focus(0);
        let popup = app.open_popup().expect("second session");
        assert_eq!(popup.panel().value(), "");
        type_keys(&mut app, "1");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.field("amount").map(NumpadField::text), Some("1"));
    }

    #[test]
    fn only_one_field_is_focused() {
        let mut app = app();
        assert!(app.focus(0));
        assert!(!app.focus(1));
        assert_eq!(app.focused_id(), Some("amount"));
    }

    #[test]
    fn tapping_a_field_row_opens_it() {
        let mut app = app();
        let row = App::field_row(1);
        assert!(app.handle_tap(CursorPos { col: 4, row }, TERM));
        assert_eq!(app.focused_id(), Some("quantity"));

        assert!(app.handle_tap(CursorPos { col: 0, row: 0 }, TERM));
        assert_eq!(app.focused_id(), None);
    }

    #[test]
    fn taps_off_the_fields_do_nothing() {
        let mut app = app();
        assert!(!app.handle_tap(CursorPos { col: 0, row: 0 }, TERM));
        assert!(!app.handle_tap(CursorPos { col: 0, row: 20 }, TERM));
        assert_eq!(app.focused_id(), None);
    }

    #[test]
    fn host_can_write_between_sessions() {
        let mut app = app();
        if let Some(field) = app.field_mut("quantity") {
            field.set_text("5");
        }
        assert_eq!(app.field("quantity").map(NumpadField::text), Some("5"));
    }
}
