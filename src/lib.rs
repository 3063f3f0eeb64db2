//! typeahead - an autocomplete input control
//!
//! The control filters a candidate list as the user types, keeps track of the
//! focused suggestion and the panel's visibility, and forwards committed
//! values to listeners and a form host. [`ui::Model`] is the control;
//! feed it [`ui::Msg`] events and read its state back for rendering.
//!
//! Tests live close to the modules they exercise as unit tests; end-to-end
//! scenarios are under `tests/`.

pub mod candidate;
pub mod error;
pub mod form;
pub mod highlight;
pub mod nav;
pub mod options;
pub mod suggest;
pub mod trace_init;

pub mod ui;

pub use candidate::Candidate;
pub use error::{Error, Result};
pub use options::Options;
