//! In-memory adapter implementations for tests and embedding.

mod timer;

pub use timer::{RecordingTimerFacility, Registration};
