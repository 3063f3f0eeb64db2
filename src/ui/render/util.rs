use lipgloss::Style;

pub fn normalize_and_pad(lines: Vec<String>, total_width: usize, per: usize) -> String {
    let line_style = Style::new().width(total_width as i32);
    let mut normalized: Vec<String> = lines.into_iter().map(|l| line_style.render(&l)).collect();
    if normalized.len() > per {
        normalized.truncate(per);
    } else {
        while normalized.len() < per {
            normalized.push(line_style.render(""));
        }
    }
    normalized.join("\n")
}

// Render with `style`, skipping empty pieces so no stray escape codes are emitted.
pub fn styled(style: &Style, s: &str) -> String {
    if s.is_empty() {
        String::new()
    } else {
        style.render(s)
    }
}

/// Cut or pad `s` to exactly `width` characters.
pub fn fit(s: &str, width: usize) -> String {
    let mut out: String = s.chars().take(width).collect();
    let n = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - n));
    out
}
