pub mod booking_view;
pub mod theme;
pub mod tui;
pub mod tui_debug;

pub use booking_view::*;
pub use theme::*;
pub use tui::*;
pub use tui_debug::*;
