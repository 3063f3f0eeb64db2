use lipgloss::{Color, Style};
use once_cell::sync::Lazy;

// Styles kept local to render module
pub static STYLE_PROMPT: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(0, 238, 238))
        .bold(true)
});
pub static STYLE_VALUE: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(255, 255, 255)));
pub static STYLE_PLACEHOLDER: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_DISABLED: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(120, 120, 120))
        .faint(true)
});
pub static STYLE_LABEL: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(200, 200, 200)));
pub static STYLE_MATCH: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
});
pub static STYLE_FOCUSED: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(0, 0, 175))
        .foreground(Color::from_rgb(255, 255, 255))
});
pub static STYLE_FOCUSED_MATCH: Lazy<Style> = Lazy::new(|| {
    STYLE_FOCUSED
        .clone()
        .foreground(Color::from_rgb(255, 215, 0))
        .bold(true)
});
pub static STYLE_DESC: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
pub static STYLE_MODELINE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(95, 95, 95))
        .foreground(Color::from_rgb(255, 255, 255))
});
pub static STYLE_KEY: Lazy<Style> = Lazy::new(|| {
    STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
});
pub static STYLE_INVALID: Lazy<Style> = Lazy::new(|| {
    STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(255, 95, 95))
        .bold(true)
});
