//! Conv1D layer with weights borrowed from constant storage.

use crate::error::{FxError, FxResult};
use crate::layers::{Layer, Shape};
use crate::math;
use crate::number::{Activation, Number};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conv1DConfig {
    pub in_channels: usize,
    pub samples: usize,
    pub filters: usize,
    pub kernel_size: usize,
    pub stride: usize,
    pub padding_left: usize,
    pub padding_right: usize,
    pub activation: Activation,
}

impl Conv1DConfig {
    pub const fn input_shape(&self) -> Shape {
        Shape::d2(self.in_channels, self.samples)
    }

    pub const fn output_samples(&self) -> usize {
        math::conv1d_output_len(
            self.samples,
            self.kernel_size,
            self.stride,
            self.padding_left,
            self.padding_right,
        )
    }

    pub const fn output_shape(&self) -> Shape {
        Shape::d2(self.filters, self.output_samples())
    }

    pub const fn kernel_len(&self) -> usize {
        self.filters * self.in_channels * self.kernel_size
    }
}

/// 1-D convolution, `Q` fractional bits.
///
/// `kernel` is `[filters][in_channels][kernel_size]` flattened row-major,
/// `bias` holds one value per filter in output units.
#[derive(Debug, Clone, Copy)]
pub struct Conv1D<'w, const Q: u32> {
    kernel: &'w [Number],
    bias: &'w [Number],
    config: Conv1DConfig,
}

impl<'w, const Q: u32> Conv1D<'w, Q> {
    pub const fn new(kernel: &'w [Number], bias: &'w [Number], config: Conv1DConfig) -> FxResult<Self> {
        if config.stride == 0 {
            return Err(FxError::ZeroStride);
        }
        if config.in_channels == 0 {
            return Err(FxError::EmptyDimension { what: "conv input channels" });
        }
        if config.samples == 0 {
            return Err(FxError::EmptyDimension { what: "conv input samples" });
        }
        if config.filters == 0 {
            return Err(FxError::EmptyDimension { what: "conv filters" });
        }
        if config.kernel_size == 0 {
            return Err(FxError::EmptyDimension { what: "conv kernel size" });
        }
        let padded = config.samples + config.padding_left + config.padding_right;
        if config.kernel_size > padded {
            return Err(FxError::WindowTooLarge {
                window: config.kernel_size,
                available: padded,
            });
        }
        if kernel.len() != config.kernel_len() {
            return Err(FxError::DimensionMismatch {
                expected: config.kernel_len(),
                actual: kernel.len(),
            });
        }
        if bias.len() != config.filters {
            return Err(FxError::DimensionMismatch {
                expected: config.filters,
                actual: bias.len(),
            });
        }
        Ok(Self { kernel, bias, config })
    }

    pub const fn config(&self) -> &Conv1DConfig {
        &self.config
    }
}

impl<const Q: u32> Layer<Q> for Conv1D<'_, Q> {
    fn name(&self) -> &'static str {
        "Conv1D"
    }

    fn output_shape(&self, input_shape: &Shape) -> FxResult<Shape> {
        let expected = self.config.input_shape();
        if *input_shape != expected {
            return Err(FxError::ShapeMismatch {
                layer: "Conv1D",
                expected: expected.total(),
                actual: input_shape.total(),
                ndim: input_shape.ndim,
            });
        }
        Ok(self.config.output_shape())
    }

    fn forward(&self, input: &[Number], output: &mut [Number]) {
        math::conv1d::<Q>(input, self.kernel, self.bias, output, &self.config);
    }
}
