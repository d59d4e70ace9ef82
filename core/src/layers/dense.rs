//! Dense (fully-connected) layer with weights borrowed from constant storage.

use crate::error::{FxError, FxResult};
use crate::layers::{Layer, Shape};
use crate::math;
use crate::number::{Activation, Number};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseConfig {
    pub in_features: usize,
    pub units: usize,
    pub activation: Activation,
}

impl DenseConfig {
    pub const fn output_shape(&self) -> Shape {
        Shape::d1(self.units)
    }
}

/// Fully-connected layer over a flattened vector.
///
/// `weights` is `[units][in_features]` row-major.
#[derive(Debug, Clone, Copy)]
pub struct Dense<'w, const Q: u32> {
    weights: &'w [Number],
    bias: &'w [Number],
    config: DenseConfig,
}

impl<'w, const Q: u32> Dense<'w, Q> {
    pub const fn new(weights: &'w [Number], bias: &'w [Number], config: DenseConfig) -> FxResult<Self> {
        if config.in_features == 0 {
            return Err(FxError::EmptyDimension { what: "dense input features" });
        }
        if config.units == 0 {
            return Err(FxError::EmptyDimension { what: "dense units" });
        }
        if weights.len() != config.units * config.in_features {
            return Err(FxError::DimensionMismatch {
                expected: config.units * config.in_features,
                actual: weights.len(),
            });
        }
        if bias.len() != config.units {
            return Err(FxError::DimensionMismatch {
                expected: config.units,
                actual: bias.len(),
            });
        }
        Ok(Self { weights, bias, config })
    }

    pub const fn config(&self) -> &DenseConfig {
        &self.config
    }
}

impl<const Q: u32> Layer<Q> for Dense<'_, Q> {
    fn name(&self) -> &'static str {
        "Dense"
    }

    /// Only flat vectors are accepted; a feature map must go through
    /// `Flatten` first.
    fn output_shape(&self, input_shape: &Shape) -> FxResult<Shape> {
        if input_shape.ndim != 1 || input_shape.total() != self.config.in_features {
            return Err(FxError::ShapeMismatch {
                layer: "Dense",
                expected: self.config.in_features,
                actual: input_shape.total(),
                ndim: input_shape.ndim,
            });
        }
        Ok(self.config.output_shape())
    }

    fn forward(&self, input: &[Number], output: &mut [Number]) {
        math::fully_connected::<Q>(input, self.weights, self.bias, output, &self.config);
    }
}
