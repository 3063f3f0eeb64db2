// UI module root: the control's state lives in `model`, its transitions in `update`,
// terminal drawing in `render`, and the bubbletea-rs adapter in `run`.

pub mod model;
pub mod render;
pub mod run;
pub mod update;

pub use model::{Model, initial_model};
pub use render::{render_full, render_input, render_panel, render_status};
pub use run::run;
pub use update::handle_update;

/// Where a pointer click landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Input,
    /// Index into the rows currently shown in the panel.
    Suggestion(usize),
    Outside,
}

// Messages used by the update logic
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    Focus,
    Blur,
    /// The whole input text after an edit.
    Input(String),
    Rune(char),
    KeyBackspace,
    KeyUp,
    KeyDown,
    KeyEnter,
    KeyEsc,
    Click(ClickTarget),
    WindowSize { width: usize, height: usize },
}
