pub mod base;
pub mod keypad;
pub mod numpad_field;
pub mod popup;
pub mod traits;
