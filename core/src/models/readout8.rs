//! Single-unit linear readout over an 8-feature vector.
//!
//! `[8] → Dense(1)`. The input is already flat, so there is no Flatten stage
//! and, as with `baseline`, no activation arena.

use crate::layers::{Dense, DenseConfig, Layer, Shape};
use crate::model::SequentialModel;
use crate::number::{Activation, FIXED_POINT};
use crate::FxResult;

use super::weights;

pub const INPUT_LEN: usize = 8;
pub const OUTPUT_LEN: usize = 1;
pub const DENSE: DenseConfig = DenseConfig {
    in_features: INPUT_LEN,
    units: OUTPUT_LEN,
    activation: Activation::Linear,
};
pub const SCRATCH_LEN: usize = 0;

pub type Readout8Model = SequentialModel<'static, FIXED_POINT, INPUT_LEN, OUTPUT_LEN>;

static DENSE_LAYER: Dense<'static, FIXED_POINT> =
    match Dense::new(&weights::READOUT8_KERNEL, &weights::READOUT8_BIAS, DENSE) {
        Ok(layer) => layer,
        Err(_) => panic!("readout weights do not match its configuration"),
    };
static CHAIN: [&dyn Layer<FIXED_POINT>; 1] = [&DENSE_LAYER];

pub const fn input_shape() -> Shape {
    Shape::d1(INPUT_LEN)
}

pub fn model() -> FxResult<Readout8Model> {
    SequentialModel::new(&CHAIN, input_shape())
}
