//! Form integration: change propagation, touched state, validation.
//!
//! A committed value change goes to three places: the value-changed
//! listeners, the callback the form framework registered through
//! [`ValueAccessor::register_on_change`], and an attached [`FormHost`].
//! Programmatic writes reach none of them.

use crate::candidate::{contains_value, Candidate};
use serde::Deserialize;
use tracing::debug;

pub type ChangeFn = Box<dyn FnMut(&str) + Send>;
pub type TouchedFn = Box<dyn FnMut() + Send>;

/// The narrow capability a host form implements.
pub trait FormHost: Send {
    fn on_change(&mut self, value: &str);

    fn on_touched(&mut self) {}

    fn is_disabled(&self) -> bool {
        false
    }
}

/// Registration surface a form framework drives.
pub trait ValueAccessor {
    /// Programmatic write; `None` clears the input. Never emits.
    fn write_value(&mut self, value: Option<&str>);
    fn register_on_change(&mut self, f: ChangeFn);
    fn register_on_touched(&mut self, f: TouchedFn);
    fn set_disabled_state(&mut self, disabled: bool);
}

/// Synchronous validation hook.
pub trait Validator {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Whether the current value has to be one of the candidates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Validation {
    #[default]
    Off,
    MustMatchCandidate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("'{value}' is not one of the suggestions")]
    NotACandidate { value: String },
}

impl ValidationError {
    /// Name the failure is reported under in a form's error map.
    pub fn key(&self) -> &'static str {
        match self {
            ValidationError::NotACandidate { .. } => "autocomplete",
        }
    }
}

impl Validation {
    /// Empty values always pass; requiring a value is the host's job.
    pub fn check(&self, value: &str, candidates: &[Candidate]) -> Result<(), ValidationError> {
        match self {
            Validation::Off => Ok(()),
            Validation::MustMatchCandidate => {
                if value.is_empty() || contains_value(candidates, value) {
                    Ok(())
                } else {
                    Err(ValidationError::NotACandidate {
                        value: value.to_string(),
                    })
                }
            }
        }
    }
}

/// Handle returned by [`Synchronizer::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Returned when nothing was stored; removing it is a no-op.
    pub const DETACHED: ListenerId = ListenerId(u64::MAX);
}

#[derive(Default)]
pub struct Synchronizer {
    listeners: Vec<(ListenerId, ChangeFn)>,
    next_id: u64,
    on_change: Option<ChangeFn>,
    on_touched: Option<TouchedFn>,
    host: Option<Box<dyn FormHost>>,
}

impl Synchronizer {
    pub fn subscribe(&mut self, listener: ChangeFn) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn set_on_change(&mut self, f: ChangeFn) {
        self.on_change = Some(f);
    }

    pub fn set_on_touched(&mut self, f: TouchedFn) {
        self.on_touched = Some(f);
    }

    pub fn attach(&mut self, host: Box<dyn FormHost>) {
        self.host = Some(host);
    }

    pub fn host_disabled(&self) -> bool {
        self.host.as_ref().is_some_and(|h| h.is_disabled())
    }

    /// Notify everyone of a committed value.
    pub fn emit(&mut self, value: &str) {
        debug!(value, listeners = self.listeners.len(), "value changed");
        for (_, listener) in self.listeners.iter_mut() {
            listener(value);
        }
        if let Some(f) = self.on_change.as_mut() {
            f(value);
        }
        if let Some(h) = self.host.as_mut() {
            h.on_change(value);
        }
    }

    pub fn touched(&mut self) {
        if let Some(f) = self.on_touched.as_mut() {
            f();
        }
        if let Some(h) = self.host.as_mut() {
            h.on_touched();
        }
    }

    /// Drop every callback; nothing is notified afterwards.
    pub fn release(&mut self) {
        self.listeners.clear();
        self.on_change = None;
        self.on_touched = None;
        self.host = None;
    }
}
