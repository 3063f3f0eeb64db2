use crate::candidate::Candidate;
use crate::form::{
    ChangeFn, FormHost, ListenerId, Synchronizer, TouchedFn, Validation, ValidationError,
    ValueAccessor, Validator,
};
use crate::highlight::highlight;
use crate::nav::{Navigation, ScrollWindow};
use crate::options::Options;
use crate::suggest::filter;
use tracing::{debug, trace};

// small constants reused by rendering code
pub const INPUT_LINES: usize = 1;
pub const STATUS_LINES: usize = 1;
pub const RESERVED_LINES: usize = INPUT_LINES + STATUS_LINES;
pub const DEFAULT_WIDTH: usize = 80;

/// The autocomplete control.
///
/// Candidates and the input value are the only sources; the suggestion list,
/// focus index and scroll window are recomputed from them on every change.
pub struct Model {
    candidates: Vec<Candidate>,
    value: String,
    min_length: usize,
    disabled: bool,
    validation: Validation,
    suggestions: Vec<Candidate>,
    nav: Navigation,
    scroll: ScrollWindow,
    max_rows: usize,
    sync: Synchronizer,
    touched: bool,
    destroyed: bool,
    // display-only state
    pub placeholder: String,
    pub highlight_tag: String,
    pub has_focus: bool,
    pub screen_width: usize,
    pub screen_height: usize,
}

impl Default for Model {
    fn default() -> Self {
        initial_model(&Options::default())
    }
}

pub fn initial_model(options: &Options) -> Model {
    let mut m = Model {
        candidates: options.candidates.clone(),
        value: options.value.clone().unwrap_or_default(),
        min_length: options.min_length,
        disabled: options.disabled,
        validation: options.validation,
        suggestions: Vec::new(),
        nav: Navigation::default(),
        scroll: ScrollWindow::new(options.max_rows),
        max_rows: options.max_rows,
        sync: Synchronizer::default(),
        touched: false,
        destroyed: false,
        placeholder: options.placeholder.clone(),
        highlight_tag: options.highlight_tag.clone(),
        has_focus: false,
        screen_width: 0,
        screen_height: 0,
    };
    m.recompute_suggestions();
    m
}

impl Model {
    pub fn new(options: &Options) -> Self {
        initial_model(options)
    }

    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) {
        crate::ui::update::handle_update(self, msg);
    }

    /* ----- candidates and value ----- */

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn set_candidates(&mut self, candidates: Vec<Candidate>) {
        if self.destroyed {
            return;
        }
        self.candidates = candidates;
        self.recompute_suggestions();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the input text. With `emit`, listeners, the registered change
    /// callback and the attached host hear about it; programmatic writes pass
    /// `false` because the caller already knows the value.
    pub fn set_value(&mut self, value: impl Into<String>, emit: bool) {
        if self.destroyed {
            return;
        }
        self.value = value.into();
        self.recompute_suggestions();
        if emit {
            self.sync.emit(&self.value);
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn set_min_length(&mut self, min_length: usize) {
        if self.destroyed {
            return;
        }
        self.min_length = min_length;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled || self.sync.host_disabled()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if self.destroyed {
            return;
        }
        self.disabled = disabled;
        if disabled {
            self.nav.close();
        }
    }

    pub fn validation(&self) -> Validation {
        self.validation
    }

    pub fn set_validation(&mut self, validation: Validation) {
        if self.destroyed {
            return;
        }
        self.validation = validation;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /* ----- derived state ----- */

    /// Rebuild the suggestion list from the current candidates and value, then
    /// drop a focus index the new list no longer reaches.
    pub fn recompute_suggestions(&mut self) {
        if self.destroyed {
            return;
        }
        self.suggestions = filter(&self.candidates, &self.value);
        self.nav.clamp(self.suggestions.len());
        self.scroll.clamp(self.suggestions.len());
        trace!(
            candidates = self.candidates.len(),
            suggestions = self.suggestions.len(),
            focused = ?self.nav.focused(),
            "recomputed suggestions"
        );
    }

    pub fn suggestions(&self) -> &[Candidate] {
        &self.suggestions
    }

    /// Rows the panel is showing: the suggestions while open, nothing while closed.
    pub fn available_rows(&self) -> &[Candidate] {
        if self.is_open() {
            &self.suggestions
        } else {
            &[]
        }
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.nav.focused()
    }

    /// A disabled control never shows its panel, whoever disabled it.
    pub fn is_open(&self) -> bool {
        self.nav.is_open() && !self.is_disabled()
    }

    pub fn scroll(&self) -> ScrollWindow {
        self.scroll
    }

    pub(crate) fn nav_mut(&mut self) -> &mut Navigation {
        &mut self.nav
    }

    /// Open or close the panel based on how much has been typed.
    pub(crate) fn open_for_query(&mut self) {
        let open = self.value.chars().count() >= self.min_length;
        self.set_open(open);
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        if open != self.nav.is_open() {
            debug!(open, "panel visibility");
        }
        self.nav.set_open(open);
    }

    pub(crate) fn scroll_to_focused(&mut self) {
        let len = self.available_rows().len();
        match self.nav.focused() {
            Some(i) if i < len => self.scroll.reveal(i),
            _ => {}
        }
    }

    pub(crate) fn resize(&mut self, width: usize, height: usize) {
        self.screen_width = width;
        self.screen_height = height;
        let room = height.saturating_sub(RESERVED_LINES).max(1);
        let rows = if self.max_rows == 0 {
            room
        } else {
            usize::min(self.max_rows, room)
        };
        self.scroll.resize(rows, self.suggestions.len());
        self.scroll_to_focused();
    }

    /* ----- selection ----- */

    /// Select the panel row at `index`; out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        let value = match self.available_rows().get(index) {
            Some(c) => c.value.clone(),
            None => return false,
        };
        self.select_value(value);
        true
    }

    pub fn select_value(&mut self, value: impl Into<String>) {
        if self.destroyed {
            return;
        }
        let value = value.into();
        debug!(%value, "suggestion selected");
        self.set_value(value, true);
        self.nav.close();
        self.nav.reset_focus();
        self.scroll.offset = 0;
    }

    pub fn highlight(&self, item: &Candidate) -> String {
        highlight(&item.value, &self.value, &self.highlight_tag)
    }

    // Render helper wrappers that forward to the render module to keep this file focused on state.
    pub fn render_input(&self) -> String {
        crate::ui::render::render_input(self)
    }
    pub fn render_panel(&self) -> Vec<String> {
        crate::ui::render::render_panel(self)
    }
    pub fn render_status(&self) -> String {
        crate::ui::render::render_status(self)
    }
    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }

    /* ----- listeners and teardown ----- */

    pub fn on_value_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&str) + Send + 'static,
    {
        if self.destroyed {
            return ListenerId::DETACHED;
        }
        self.sync.subscribe(Box::new(listener))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.sync.unsubscribe(id)
    }

    pub fn attach_host(&mut self, host: Box<dyn FormHost>) {
        if self.destroyed {
            return;
        }
        let disabled = host.is_disabled();
        self.sync.attach(host);
        if disabled {
            self.nav.close();
        }
    }

    pub(crate) fn mark_touched(&mut self) {
        self.touched = true;
        self.sync.touched();
    }

    /// Release every listener and callback. Later mutations are ignored.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        debug!("control destroyed");
        self.sync.release();
        self.nav.close();
        self.nav.reset_focus();
        self.destroyed = true;
    }
}

impl ValueAccessor for Model {
    fn write_value(&mut self, value: Option<&str>) {
        self.set_value(value.unwrap_or_default(), false);
    }

    fn register_on_change(&mut self, f: ChangeFn) {
        if !self.destroyed {
            self.sync.set_on_change(f);
        }
    }

    fn register_on_touched(&mut self, f: TouchedFn) {
        if !self.destroyed {
            self.sync.set_on_touched(f);
        }
    }

    fn set_disabled_state(&mut self, disabled: bool) {
        self.set_disabled(disabled);
    }
}

impl Validator for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        self.validation.check(&self.value, &self.candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::candidates;
    use crate::ui::Msg;
    use std::sync::{Arc, Mutex};

    fn model(items: &[&str]) -> Model {
        initial_model(&Options {
            candidates: candidates(items.iter().copied()),
            ..Options::default()
        })
    }

    fn values(list: &[Candidate]) -> Vec<&str> {
        list.iter().map(|c| c.value.as_str()).collect()
    }

    #[test]
    fn initial_model_applies_options() {
        let m = initial_model(&Options {
            candidates: candidates(["Hel", "Hello"]),
            value: Some("hello".to_string()),
            min_length: 3,
            placeholder: "Type".to_string(),
            ..Options::default()
        });
        assert_eq!(m.value(), "hello");
        assert_eq!(values(m.suggestions()), vec!["Hello"]);
        assert_eq!(m.min_length(), 3);
        assert_eq!(m.placeholder, "Type");
        assert!(!m.is_open());
        assert_eq!(m.focused_index(), None);
    }

    #[test]
    fn replacing_candidates_recomputes() {
        let mut m = model(&["Hel", "Hello", "Hello world"]);
        m.set_value("hel", false);
        assert_eq!(m.suggestions().len(), 3);
        m.set_candidates(candidates(["help", "shell", "nope"]));
        assert_eq!(values(m.suggestions()), vec!["help", "shell"]);
    }

    #[test]
    fn shrinking_list_resets_stale_focus() {
        let mut m = model(&["a1", "a2", "a3", "b"]);
        m.update(Msg::Focus);
        m.update(Msg::KeyDown);
        m.update(Msg::KeyDown);
        m.update(Msg::KeyDown);
        assert_eq!(m.focused_index(), Some(2));
        m.set_candidates(candidates(["a1", "a2"]));
        assert_eq!(m.focused_index(), None);
    }

    #[test]
    fn focus_within_range_survives_recompute() {
        let mut m = model(&["a1", "a2", "a3"]);
        m.update(Msg::Focus);
        m.update(Msg::KeyDown);
        m.update(Msg::KeyDown);
        m.set_candidates(candidates(["a1", "a2", "x"]));
        assert_eq!(m.focused_index(), Some(1));
    }

    #[test]
    fn programmatic_write_does_not_emit() {
        let mut m = model(&["Hello"]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        m.on_value_change(move |v| s.lock().unwrap().push(v.to_string()));
        m.set_value("Hello", false);
        m.write_value(Some("Hel"));
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(m.value(), "Hel");
        m.write_value(None);
        assert_eq!(m.value(), "");
        m.set_value("He", true);
        assert_eq!(*seen.lock().unwrap(), vec!["He"]);
    }

    #[test]
    fn validator_follows_policy() {
        let mut m = model(&["Hello"]);
        m.set_value("Hi", false);
        assert!(m.validate().is_ok());
        m.set_validation(Validation::MustMatchCandidate);
        assert_eq!(m.validate().unwrap_err().key(), "autocomplete");
        m.set_value("Hello", false);
        assert!(m.validate().is_ok());
    }

    #[test]
    fn host_can_disable_the_control() {
        struct Disabled;
        impl FormHost for Disabled {
            fn on_change(&mut self, _value: &str) {}
            fn is_disabled(&self) -> bool {
                true
            }
        }
        let mut m = model(&["a"]);
        assert!(!m.is_disabled());
        m.attach_host(Box::new(Disabled));
        assert!(m.is_disabled());
    }

    #[test]
    fn disabling_host_closes_an_open_panel() {
        struct Toggle(Arc<Mutex<bool>>);
        impl FormHost for Toggle {
            fn on_change(&mut self, _value: &str) {}
            fn is_disabled(&self) -> bool {
                *self.0.lock().unwrap()
            }
        }

        let mut m = model(&["Hel", "Hello"]);
        m.update(Msg::Focus);
        assert!(m.is_open());
        m.attach_host(Box::new(Toggle(Arc::new(Mutex::new(true)))));
        m.update(Msg::KeyEsc);
        assert!(!m.is_open());
        assert!(m.available_rows().is_empty());

        // the host turns disabled after attaching while the panel is open
        let flag = Arc::new(Mutex::new(false));
        let mut m = model(&["Hel", "Hello"]);
        m.attach_host(Box::new(Toggle(flag.clone())));
        m.update(Msg::Focus);
        assert_eq!(m.available_rows().len(), 2);
        *flag.lock().unwrap() = true;
        assert!(!m.is_open());
        assert!(m.available_rows().is_empty());
        m.update(Msg::KeyDown);
        assert_eq!(m.focused_index(), None);
    }

    #[test]
    fn destroy_releases_and_freezes() {
        let mut m = model(&["Hello", "Help"]);
        let hits = Arc::new(Mutex::new(0usize));
        let h = hits.clone();
        m.on_value_change(move |_| *h.lock().unwrap() += 1);
        m.destroy();
        assert!(m.is_destroyed());
        m.set_value("Hel", true);
        m.set_candidates(candidates(["x"]));
        m.update(Msg::Input("Help".to_string()));
        assert_eq!(*hits.lock().unwrap(), 0);
        assert_eq!(m.value(), "");
        assert_eq!(m.candidates().len(), 2);

        m.set_min_length(5);
        m.set_disabled(true);
        m.set_validation(Validation::MustMatchCandidate);
        let id = m.on_value_change(|_| {});
        assert_eq!(m.min_length(), 0);
        assert!(!m.is_disabled());
        assert_eq!(m.validation(), Validation::Off);
        assert_eq!(m.sync.listener_count(), 0);
        assert!(!m.remove_listener(id));
    }

    #[test]
    fn highlight_uses_configured_tag() {
        let mut m = model(&["Hello world"]);
        m.highlight_tag = "mark".to_string();
        m.set_value("WOR", false);
        assert_eq!(m.highlight(&m.suggestions()[0]), "Hello <mark>wor</mark>ld");
    }
}
