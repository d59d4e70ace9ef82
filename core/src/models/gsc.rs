//! Keyword-spotting classifier for 100-sample Google Speech Commands frames.
//!
//! ```text
//! [1 × 100] → MaxPool1D(4, /3) → [1 × 33]
//!           → Conv1D(64 × 8, ReLU) → [64 × 26]
//!           → Flatten → [1664]
//!           → Dense(1) → [1]
//! ```
//!
//! Q = 9. The single output is a keyword score: positive means detected.

use crate::layers::{Conv1D, Conv1DConfig, Dense, DenseConfig, Flatten, Layer, MaxPool1D, PoolConfig, Shape};
use crate::model::SequentialModel;
use crate::number::{Activation, Number, FIXED_POINT};
use crate::FxResult;

use super::weights;

pub const INPUT_CHANNELS: usize = 1;
pub const INPUT_SAMPLES: usize = 100;
pub const INPUT_LEN: usize = INPUT_CHANNELS * INPUT_SAMPLES;

pub const POOL: PoolConfig = PoolConfig {
    channels: INPUT_CHANNELS,
    samples: INPUT_SAMPLES,
    pool_size: 4,
    stride: 3,
    padding: 0,
    activation: Activation::Linear,
};
pub const POOL_SAMPLES: usize = POOL.output_samples();

pub const CONV_FILTERS: usize = 64;
pub const CONV_KERNEL_SIZE: usize = 8;
pub const CONV: Conv1DConfig = Conv1DConfig {
    in_channels: INPUT_CHANNELS,
    samples: POOL_SAMPLES,
    filters: CONV_FILTERS,
    kernel_size: CONV_KERNEL_SIZE,
    stride: 1,
    padding_left: 0,
    padding_right: 0,
    activation: Activation::ReLU,
};
pub const CONV_SAMPLES: usize = CONV.output_samples();

pub const FLAT_FEATURES: usize = CONV_FILTERS * CONV_SAMPLES;

pub const OUTPUT_LEN: usize = 1;
pub const DENSE: DenseConfig = DenseConfig {
    in_features: FLAT_FEATURES,
    units: OUTPUT_LEN,
    activation: Activation::Linear,
};

/// Ping holds the pooled frame, pong the convolution output (read in place
/// by Dense after Flatten). Dense writes the caller's output.
pub const SCRATCH_LEN: usize = INPUT_CHANNELS * POOL_SAMPLES + FLAT_FEATURES;

const _: () = assert!(POOL_SAMPLES == 33);
const _: () = assert!(CONV_SAMPLES == 26);
const _: () = assert!(CONV.output_shape().total() == DENSE.in_features);
const _: () = assert!(POOL.output_shape().total() == CONV.input_shape().total());

pub type GscModel = SequentialModel<'static, FIXED_POINT, INPUT_LEN, OUTPUT_LEN>;

/// The four stages of one trained variant.
pub struct GscLayers {
    pub pool: MaxPool1D,
    pub conv: Conv1D<'static, FIXED_POINT>,
    pub flatten: Flatten,
    pub dense: Dense<'static, FIXED_POINT>,
}

impl GscLayers {
    /// Build the stages in a `const` context; a malformed table fails the
    /// build.
    pub const fn new(
        conv_kernel: &'static [Number],
        conv_bias: &'static [Number],
        dense_kernel: &'static [Number],
        dense_bias: &'static [Number],
    ) -> Self {
        Self {
            pool: match MaxPool1D::new(POOL) {
                Ok(layer) => layer,
                Err(_) => panic!("invalid GSC pooling configuration"),
            },
            conv: match Conv1D::new(conv_kernel, conv_bias, CONV) {
                Ok(layer) => layer,
                Err(_) => panic!("GSC convolution weights do not match its configuration"),
            },
            flatten: Flatten,
            dense: match Dense::new(dense_kernel, dense_bias, DENSE) {
                Ok(layer) => layer,
                Err(_) => panic!("GSC dense weights do not match its configuration"),
            },
        }
    }
}

pub static LAYERS_A: GscLayers = GscLayers::new(
    &weights::CONV_KERNEL_A,
    &weights::CONV_BIAS_A,
    &weights::DENSE_KERNEL_A,
    &weights::DENSE_BIAS_A,
);

pub static LAYERS_B: GscLayers = GscLayers::new(
    &weights::CONV_KERNEL_B,
    &weights::CONV_BIAS_B,
    &weights::DENSE_KERNEL_B,
    &weights::DENSE_BIAS_B,
);

static CHAIN_A: [&dyn Layer<FIXED_POINT>; 4] = [&LAYERS_A.pool, &LAYERS_A.conv, &LAYERS_A.flatten, &LAYERS_A.dense];
static CHAIN_B: [&dyn Layer<FIXED_POINT>; 4] = [&LAYERS_B.pool, &LAYERS_B.conv, &LAYERS_B.flatten, &LAYERS_B.dense];

pub const fn input_shape() -> Shape {
    Shape::d2(INPUT_CHANNELS, INPUT_SAMPLES)
}

pub fn variant_a() -> FxResult<GscModel> {
    SequentialModel::new(&CHAIN_A, input_shape())
}

pub fn variant_b() -> FxResult<GscModel> {
    SequentialModel::new(&CHAIN_B, input_shape())
}
