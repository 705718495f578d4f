//! Terminal UI for playing Connect Four locally.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
