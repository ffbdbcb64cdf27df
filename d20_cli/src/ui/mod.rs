//! Terminal UI: the ratatui event loop, the confetti renderer and the small
//! helpers around them.

pub mod colors;
pub mod confetti_widget;
pub mod die;
pub mod output;
pub mod throttle;
pub mod tui_app;
