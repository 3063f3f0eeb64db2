use crate::candidate::Candidate;
use crate::ui::model::Model;
use crate::ui::render::decorate::decorate_value;
use crate::ui::render::styles::{STYLE_DESC, STYLE_FOCUSED};

fn render_row(it: &Candidate, query: &str, focused: bool) -> String {
    let marker = if focused {
        STYLE_FOCUSED.render("› ")
    } else {
        "  ".to_string()
    };
    let prefix = match &it.prefix {
        Some(p) => STYLE_DESC.render(&format!("{p} ")),
        None => String::new(),
    };
    format!("{marker}{prefix}{}", decorate_value(&it.value, query, focused))
}

/// Lines of the suggestion panel; empty while the panel is closed.
pub fn render_panel(m: &Model) -> Vec<String> {
    let rows = m.available_rows();
    let focused = m.focused_index();
    m.scroll()
        .range(rows.len())
        .map(|idx| render_row(&rows[idx], m.value(), focused == Some(idx)))
        .collect()
}
