//! Layer zoo for 1-D fixed-point networks.

pub mod conv;
pub mod dense;
pub mod flatten;
pub mod pooling;

use crate::error::FxResult;
use crate::number::Number;

/// Activation shape: `d1(len)` for vectors, `d2(channels, samples)` for
/// channel-major feature maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub dims: [usize; 2],
    pub ndim: usize,
}

impl Shape {
    pub const fn d1(len: usize) -> Self {
        Self { dims: [len, 0], ndim: 1 }
    }
    pub const fn d2(channels: usize, samples: usize) -> Self {
        Self { dims: [channels, samples], ndim: 2 }
    }
    pub const fn total(&self) -> usize {
        match self.ndim {
            1 => self.dims[0],
            _ => self.dims[0] * self.dims[1],
        }
    }
    pub const fn channels(&self) -> usize {
        if self.ndim == 2 { self.dims[0] } else { 1 }
    }
    pub const fn samples(&self) -> usize {
        if self.ndim == 2 { self.dims[1] } else { self.dims[0] }
    }
}

/// One stage of a sequential model.
///
/// `Q` is the fixed-point format of the stage; a model only accepts layers
/// of a single format. `forward` is only called with buffers sized from
/// `output_shape`, after the model has validated the whole chain.
pub trait Layer<const Q: u32>: Send + Sync {
    fn name(&self) -> &'static str;
    fn output_shape(&self, input_shape: &Shape) -> FxResult<Shape>;
    fn forward(&self, input: &[Number], output: &mut [Number]);

    /// Pure reshape: the model reuses the input storage instead of calling
    /// `forward`.
    fn is_reshape(&self) -> bool {
        false
    }
}

pub use conv::{Conv1D, Conv1DConfig};
pub use dense::{Dense, DenseConfig};
pub use flatten::Flatten;
pub use pooling::{MaxPool1D, PoolConfig};
