// Render module split into focused submodules: input line, suggestion panel, status line.

pub mod decorate;
pub mod full;
pub mod input;
pub mod list;
pub mod modeline;
pub mod styles;
pub mod util;

pub use decorate::decorate_value;
pub use full::render_full;
pub use input::render_input;
pub use list::render_panel;
pub use modeline::{form_status, render_status};
