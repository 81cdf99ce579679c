//! Shared CLI plumbing.
//!
//! - `output_contract`: output-mode selection, JSON envelopes, message redaction.
//! - `logging`: stderr tracing subscriber driven by `RUST_LOG`.

pub mod logging;
pub mod output_contract;

pub use output_contract::{
    ENVELOPE_SCHEMA_VERSION, OutputMode, OutputModeSelectionError, error_envelope,
    redact_sensitive, select_output_mode, success_envelope,
};
