//! Error types for the fxcnn-core library.
//!
//! Every error here is a configuration error raised while a model is being
//! built: layer constructors, `SequentialModel::new` and arena binding.
//! Inference itself cannot fail; numeric overflow saturates instead.

use thiserror::Error;

/// All configuration errors the library can report.
///
/// `Copy` so the layer constructors stay usable in `const` items, where a
/// rejected configuration turns into a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FxError {
    /// A parameter slice or tensor has the wrong element count.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A layer received a shape it cannot consume.
    #[error("{layer}: cannot consume input of {actual} elements in {ndim} dimension(s), expected {expected}")]
    ShapeMismatch {
        layer: &'static str,
        expected: usize,
        actual: usize,
        ndim: usize,
    },

    /// Pooling only supports `padding == 0`.
    #[error("unsupported pooling padding {padding}")]
    UnsupportedPadding { padding: usize },

    #[error("stride must be non-zero")]
    ZeroStride,

    /// Pooling window or convolution kernel wider than the padded input.
    #[error("window of {window} does not fit {available} input samples")]
    WindowTooLarge { window: usize, available: usize },

    #[error("{what} must be non-zero")]
    EmptyDimension { what: &'static str },

    #[error("model has {count} layers, at most {max} are supported")]
    TooManyLayers { count: usize, max: usize },

    /// Scratch buffer smaller than the model's activation plan.
    #[error("activation arena too small: required {required}, available {available}")]
    ArenaTooSmall { required: usize, available: usize },
}

pub type FxResult<T> = Result<T, FxError>;
