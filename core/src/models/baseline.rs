//! Linear baseline trained on the same 100-sample frames as `gsc`.
//!
//! `[1 × 100] → Flatten → Dense(1)`. Only the final stage computes, so the
//! model needs no activation arena.

use crate::layers::{Dense, DenseConfig, Flatten, Layer};
use crate::model::SequentialModel;
use crate::number::{Activation, FIXED_POINT};
use crate::FxResult;

use super::gsc::{input_shape, INPUT_LEN};
use super::weights;

pub const OUTPUT_LEN: usize = 1;
pub const DENSE: DenseConfig = DenseConfig {
    in_features: INPUT_LEN,
    units: OUTPUT_LEN,
    activation: Activation::Linear,
};
pub const SCRATCH_LEN: usize = 0;

pub type BaselineModel = SequentialModel<'static, FIXED_POINT, INPUT_LEN, OUTPUT_LEN>;

static FLATTEN: Flatten = Flatten;
static DENSE_LAYER: Dense<'static, FIXED_POINT> =
    match Dense::new(&weights::BASELINE_KERNEL, &weights::BASELINE_BIAS, DENSE) {
        Ok(layer) => layer,
        Err(_) => panic!("baseline weights do not match its configuration"),
    };
static CHAIN: [&dyn Layer<FIXED_POINT>; 2] = [&FLATTEN, &DENSE_LAYER];

pub fn model() -> FxResult<BaselineModel> {
    SequentialModel::new(&CHAIN, input_shape())
}
