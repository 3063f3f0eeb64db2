use crate::ui::model::Model;
use crate::ui::{ClickTarget, Msg};
use tracing::trace;

pub fn handle_update(m: &mut Model, msg: Msg) {
    if m.is_destroyed() {
        return;
    }
    trace!(?msg, "update");
    match msg {
        Msg::WindowSize { width, height } => m.resize(width, height),
        Msg::Blur => handle_blur(m),
        Msg::Click(target) => handle_click(m, target),
        // everything below is user input and ignored while disabled
        _ if m.is_disabled() => {}
        Msg::Focus => handle_focus(m),
        Msg::Input(value) => handle_input(m, value),
        Msg::Rune(r) => handle_rune(m, r),
        Msg::KeyBackspace => handle_key_backspace(m),
        Msg::KeyUp => handle_key_up(m),
        Msg::KeyDown => handle_key_down(m),
        Msg::KeyEnter => handle_key_enter(m),
        Msg::KeyEsc => handle_key_esc(m),
    }
}

fn handle_focus(m: &mut Model) {
    m.has_focus = true;
    let open = m.min_length() == 0;
    m.set_open(open);
}

fn handle_blur(m: &mut Model) {
    m.has_focus = false;
    m.mark_touched();
}

fn handle_input(m: &mut Model, value: String) {
    m.set_value(value, true);
    m.open_for_query();
}

fn handle_rune(m: &mut Model, r: char) {
    let mut value = m.value().to_string();
    value.push(r);
    handle_input(m, value);
}

fn handle_key_backspace(m: &mut Model) {
    if m.value().is_empty() {
        return;
    }
    let mut value = m.value().to_string();
    value.pop();
    handle_input(m, value);
}

fn handle_key_down(m: &mut Model) {
    let len = m.available_rows().len();
    if len == 0 {
        m.open_for_query();
        return;
    }
    m.nav_mut().next(len);
    m.scroll_to_focused();
}

fn handle_key_up(m: &mut Model) {
    let len = m.available_rows().len();
    if len == 0 {
        m.open_for_query();
        return;
    }
    m.nav_mut().prev(len);
    m.scroll_to_focused();
}

// Zero rows: nothing to pick. One row: pick it even without focus.
// Several rows: only the focused one.
fn handle_key_enter(m: &mut Model) {
    let index = match (m.available_rows().len(), m.focused_index()) {
        (0, _) => return,
        (1, _) => 0,
        (_, Some(i)) => i,
        (_, None) => return,
    };
    m.select(index);
}

fn handle_key_esc(m: &mut Model) {
    m.set_open(false);
}

fn handle_click(m: &mut Model, target: ClickTarget) {
    match target {
        ClickTarget::Input => {}
        ClickTarget::Suggestion(i) => {
            if !m.is_disabled() {
                m.select(i);
            }
        }
        ClickTarget::Outside => m.set_open(false),
    }
}
