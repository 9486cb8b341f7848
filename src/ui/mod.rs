pub mod canvas;
pub mod frame_json;
pub mod geometry;
pub mod renderer;
pub mod span;
pub mod style;
pub mod theme;
