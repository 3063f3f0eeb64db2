use crate::ui::model::{DEFAULT_WIDTH, Model, STATUS_LINES};
use crate::ui::render::input::render_input;
use crate::ui::render::list::render_panel;
use crate::ui::render::modeline::render_status;
use crate::ui::render::util::normalize_and_pad;

pub fn render_full(m: &Model) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let mut lines = vec![render_input(m)];
    lines.extend(render_panel(m));
    let per = if m.screen_height > 0 {
        m.screen_height.saturating_sub(STATUS_LINES)
    } else {
        lines.len()
    };
    let body = normalize_and_pad(lines, total_width, per);
    let status = render_status(m);
    if body.is_empty() {
        status
    } else {
        format!("{body}\n{status}")
    }
}
