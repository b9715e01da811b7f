pub mod console;
pub mod controls;
pub mod map_panel;
