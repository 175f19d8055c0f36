pub mod app;
pub mod cursor;
pub mod dialog;
pub mod events;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode};
