use thiserror::Error;

/// Error type returned by faceframe operations.
#[derive(Debug, Error)]
pub enum FocusError {
    /// The detector reported no faces. Not a defect: callers fall back to
    /// presenting the full image and skip the completion callback.
    #[error("no face detections to aggregate")]
    EmptyDetections,

    /// An image or viewport dimension was zero, negative, or non-finite.
    /// Surfaced immediately instead of being clamped, so integration bugs
    /// stay visible.
    #[error("{what} has degenerate dimensions {width}x{height}")]
    DegenerateSize {
        /// Which input was rejected.
        what: &'static str,
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },

    /// A detection rectangle was non-finite or had a non-positive dimension.
    #[error("detection {index} has a malformed bounding box")]
    InvalidDetection {
        /// Position of the offending detection in the input slice.
        index: usize,
    },

    /// A tuning option held a value the geometry cannot work with.
    #[error("option {name} is out of range: {value}")]
    InvalidOption {
        /// Name of the rejected option.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// The optional detector backend failed to load its model.
    #[cfg(feature = "rustface")]
    #[error("failed to load detector model: {0}")]
    ModelLoad(String),
}
