use crate::highlight::match_range;
use crate::ui::render::styles::{STYLE_FOCUSED, STYLE_FOCUSED_MATCH, STYLE_LABEL, STYLE_MATCH};
use crate::ui::render::util::styled;

/// Style a suggestion value for the terminal, emphasising the part the query matched.
pub fn decorate_value(value: &str, query: &str, focused: bool) -> String {
    let (base, hit) = if focused {
        (&*STYLE_FOCUSED, &*STYLE_FOCUSED_MATCH)
    } else {
        (&*STYLE_LABEL, &*STYLE_MATCH)
    };
    match match_range(value, query) {
        Some(r) => format!(
            "{}{}{}",
            styled(base, &value[..r.start]),
            styled(hit, &value[r.clone()]),
            styled(base, &value[r.end..])
        ),
        None => styled(base, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matched_part_uses_match_style() {
        let out = decorate_value("Hello world", "WOR", false);
        assert!(out.contains(&STYLE_MATCH.render("wor")));
        assert!(out.contains(&STYLE_LABEL.render("Hello ")));
    }

    #[test]
    fn focused_row_uses_focused_styles() {
        let out = decorate_value("Hello", "ell", true);
        assert!(out.contains(&STYLE_FOCUSED_MATCH.render("ell")));
    }

    #[test]
    fn no_query_renders_plain_label() {
        assert_eq!(decorate_value("Hello", "", false), STYLE_LABEL.render("Hello"));
    }
}
