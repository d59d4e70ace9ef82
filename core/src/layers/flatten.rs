//! Flatten layer: [C, N] → [C*N].
//!
//! Activations are stored channel-major, which already is the flattened
//! order, so inside a model this is a view: the model skips `forward` and
//! hands the next layer the same storage. `forward` still copies for
//! callers driving layers by hand.

use crate::error::FxResult;
use crate::layers::{Layer, Shape};
use crate::number::Number;

#[derive(Debug, Clone, Copy, Default)]
pub struct Flatten;

impl<const Q: u32> Layer<Q> for Flatten {
    fn name(&self) -> &'static str {
        "Flatten"
    }

    fn output_shape(&self, input_shape: &Shape) -> FxResult<Shape> {
        Ok(Shape::d1(input_shape.total()))
    }

    fn forward(&self, input: &[Number], output: &mut [Number]) {
        output.copy_from_slice(input);
    }

    fn is_reshape(&self) -> bool {
        true
    }
}
