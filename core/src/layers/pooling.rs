//! Pooling layers: MaxPool1D.
//!
//! Reduces the sample axis of every channel independently.
//! No learnable parameters.

use crate::error::{FxError, FxResult};
use crate::layers::{Layer, Shape};
use crate::math;
use crate::number::{Activation, Number};

/// Static description of a max pooling stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    pub channels: usize,
    pub samples: usize,
    pub pool_size: usize,
    pub stride: usize,
    /// Must be zero; any other value is rejected by `MaxPool1D::new`.
    pub padding: usize,
    /// `ReLU` seeds the running maximum at zero.
    pub activation: Activation,
}

impl PoolConfig {
    pub const fn input_shape(&self) -> Shape {
        Shape::d2(self.channels, self.samples)
    }

    pub const fn output_samples(&self) -> usize {
        math::pool_output_len(self.samples, self.pool_size, self.stride, self.padding)
    }

    pub const fn output_shape(&self) -> Shape {
        Shape::d2(self.channels, self.output_samples())
    }
}

/// Max pooling 1D layer.
///
/// [C, N] → [C, (N - pool_size) / stride + 1]. Windows overlap when
/// `stride < pool_size`.
#[derive(Debug, Clone, Copy)]
pub struct MaxPool1D {
    config: PoolConfig,
}

impl MaxPool1D {
    pub const fn new(config: PoolConfig) -> FxResult<Self> {
        if config.padding != 0 {
            return Err(FxError::UnsupportedPadding { padding: config.padding });
        }
        if config.stride == 0 {
            return Err(FxError::ZeroStride);
        }
        if config.channels == 0 {
            return Err(FxError::EmptyDimension { what: "pool channels" });
        }
        if config.pool_size == 0 {
            return Err(FxError::EmptyDimension { what: "pool size" });
        }
        if config.pool_size > config.samples {
            return Err(FxError::WindowTooLarge {
                window: config.pool_size,
                available: config.samples,
            });
        }
        Ok(Self { config })
    }

    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }
}

impl<const Q: u32> Layer<Q> for MaxPool1D {
    fn name(&self) -> &'static str {
        "MaxPool1D"
    }

    fn output_shape(&self, input_shape: &Shape) -> FxResult<Shape> {
        let expected = self.config.input_shape();
        if *input_shape != expected {
            return Err(FxError::ShapeMismatch {
                layer: "MaxPool1D",
                expected: expected.total(),
                actual: input_shape.total(),
                ndim: input_shape.ndim,
            });
        }
        Ok(self.config.output_shape())
    }

    fn forward(&self, input: &[Number], output: &mut [Number]) {
        math::max_pool_1d(input, output, &self.config);
    }
}
