pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod runtime;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use config::{ConfigError, NumpadConfig, SizeHint};
pub use widgets::keypad::{KeypadKey, KeypadPanel};
pub use widgets::numpad_field::NumpadField;
pub use widgets::popup::Popup;
