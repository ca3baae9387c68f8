use thiserror::Error;

/// Failures of a merge-update against the store. Both kinds leave the store
/// untouched; a merge is applied in full or not at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Merge target does not exist (or is not writable, like `system`).
    #[error("unknown sensor channel: {0}")]
    UnknownChannel(String),

    /// A field in the patch has the wrong name, type, or range for the
    /// channel's schema.
    #[error("invalid field for channel {channel}: {detail}")]
    InvalidField {
        channel: &'static str,
        detail: String,
    },
}

/// A frame that matched the marker shape but carries a corrupt payload.
/// Distinct from the `Unrecognized` decode outcome, which is not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("malformed telemetry frame: {0}")]
    Malformed(String),
}
