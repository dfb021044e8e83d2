//! UI/backend events for the workbench controller.
//!
//! Submission outcomes share one display slot: a success replaces any error
//! and a failure replaces any response. Failure text is one of the fixed
//! user-facing messages; the underlying cause is only logged.

use shared::protocol::FilterResponse;

pub enum UiEvent {
    SubmitOk(FilterResponse),
    SubmitFailed { message: &'static str },
}
