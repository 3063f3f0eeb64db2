use crate::form::Validator;
use crate::ui::model::{DEFAULT_WIDTH, Model};
use crate::ui::render::styles::{STYLE_INVALID, STYLE_KEY, STYLE_MODELINE};
use crate::ui::render::util::fit;

/// Form status shown at the right edge: `disabled`, `required`, the validator's
/// failure key, or `valid`.
pub fn form_status(m: &Model) -> &'static str {
    if m.is_disabled() {
        return "disabled";
    }
    if m.value().is_empty() {
        return "required";
    }
    match m.validate() {
        Ok(()) => "valid",
        Err(e) => e.key(),
    }
}

pub fn render_status(m: &Model) -> String {
    let width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };

    // key/description pairs definitions
    let pairs_def: Vec<(&str, &str)> = vec![("↑↓", "move"), ("⏎", "pick"), ("⎋", "close")];
    let left_plain = pairs_def
        .iter()
        .map(|(k, d)| format!("{d}:{k}"))
        .collect::<Vec<_>>()
        .join("  ");

    let counter = match m.focused_index() {
        Some(i) => format!("{}/{}", i + 1, m.suggestions().len()),
        None => format!("-/{}", m.suggestions().len()),
    };
    let status = form_status(m);
    let right_plain = format!("{counter} | {status}");

    // Drop the key hints first when the line is too narrow.
    let right_w = right_plain.chars().count();
    let left_w = left_plain.chars().count();
    if left_w + 1 + right_w > width {
        return STYLE_MODELINE.render(&fit(&right_plain, width));
    }

    let left_rendered = pairs_def
        .iter()
        .map(|(k, d)| format!("{}{}", STYLE_MODELINE.render(&format!("{d}:")), STYLE_KEY.render(k)))
        .collect::<Vec<_>>()
        .join(&STYLE_MODELINE.render("  "));
    let gap = " ".repeat(width - left_w - right_w);
    let status_style = if status == "valid" {
        &*STYLE_MODELINE
    } else {
        &*STYLE_INVALID
    };
    format!(
        "{}{}{}",
        left_rendered,
        STYLE_MODELINE.render(&format!("{gap}{counter} | ")),
        status_style.render(status)
    )
}
