use crate::ui::model::Model;
use crate::ui::render::styles::{STYLE_DISABLED, STYLE_PLACEHOLDER, STYLE_PROMPT, STYLE_VALUE};
use crate::ui::render::util::styled;

pub fn render_input(m: &Model) -> String {
    let prompt = if m.has_focus {
        STYLE_PROMPT.render("> ")
    } else {
        "  ".to_string()
    };
    let body = if m.value().is_empty() {
        styled(&STYLE_PLACEHOLDER, &m.placeholder)
    } else if m.is_disabled() {
        styled(&STYLE_DISABLED, m.value())
    } else {
        styled(&STYLE_VALUE, m.value())
    };
    format!("{prompt}{body}")
}
