//! Fixed-point kernels for 1-D inference.
//!
//! All kernels are infallible: the layer constructors validate shapes and
//! parameter lengths once, so the hot loops only carry `debug_assert!`s.
//!
//! Calling a kernel directly is only valid with a configuration accepted by
//! the matching layer constructor (`MaxPool1D::new`, `Conv1D::new`,
//! `Dense::new`) and buffers of exactly the lengths that configuration
//! implies. Release builds do not check this: an empty dimension panics and
//! a short `output` is left partly unwritten.
//!
//! Accumulation strategy: `i16 × i16` products always fit in `i32`; sums of
//! products wrap in two's complement exactly like the 32-bit MAC of the target
//! core. The only saturation point is the final `clamp` of each output.

use crate::layers::conv::Conv1DConfig;
use crate::layers::dense::DenseConfig;
use crate::layers::pooling::PoolConfig;
use crate::number::{Activation, Fixed, LongNumber, Number};

// =============================================================================
// Output sizes
// =============================================================================

/// Pooled samples per channel: `(samples - pool_size + 2 * padding) / stride + 1`.
///
/// `stride` must be non-zero.
#[inline]
pub const fn pool_output_len(samples: usize, pool_size: usize, stride: usize, padding: usize) -> usize {
    (samples + 2 * padding).saturating_sub(pool_size) / stride + 1
}

/// Convolved samples per filter:
/// `(samples - kernel_size + padding_left + padding_right) / stride + 1`.
#[inline]
pub const fn conv1d_output_len(
    samples: usize,
    kernel_size: usize,
    stride: usize,
    padding_left: usize,
    padding_right: usize,
) -> usize {
    (samples + padding_left + padding_right).saturating_sub(kernel_size) / stride + 1
}

// =============================================================================
// Pooling
// =============================================================================

/// Max pooling over the sample axis, channels independent.
///
/// Input:  [channels × samples]
/// Output: [channels × pool_output_len]
///
/// With `Activation::ReLU` the running maximum starts at zero, so the pooled
/// value is never negative. With `Activation::Linear` it starts at the first
/// element of the window.
///
/// `config` must be accepted by `MaxPool1D::new`; `input` and `output` must
/// hold exactly `config.input_shape()` and `config.output_shape()` elements.
pub fn max_pool_1d(input: &[Number], output: &mut [Number], config: &PoolConfig) {
    let out_len = config.output_samples();
    debug_assert_eq!(input.len(), config.channels * config.samples);
    debug_assert_eq!(output.len(), config.channels * out_len);

    let rows = input.chunks_exact(config.samples);
    for (row, out_row) in rows.zip(output.chunks_exact_mut(out_len)) {
        for (pos, out) in out_row.iter_mut().enumerate() {
            let start = pos * config.stride;
            let window = &row[start..start + config.pool_size];
            let seed = match config.activation {
                Activation::Linear => window[0],
                Activation::ReLU => 0,
            };
            *out = window.iter().fold(seed, |max, &v| max.max(v));
        }
    }
}

// =============================================================================
// Convolution
// =============================================================================

/// Multi-filter, multi-channel 1-D convolution with zero padding.
///
/// Input:  [in_channels × samples]
/// Kernel: [filters × in_channels × kernel_size]
/// Bias:   [filters]
/// Output: [filters × conv1d_output_len]
///
/// Per output element: channel partial sums are accumulated, the total is
/// rescaled by `Q`, then the bias is added in rescaled units. Taps that fall
/// into the padding contribute nothing.
///
/// `config`, `kernel` and `bias` must be accepted by `Conv1D::new`; `input`
/// and `output` must match `config.input_shape()` and `config.output_shape()`.
pub fn conv1d<const Q: u32>(
    input: &[Number],
    kernel: &[Number],
    bias: &[Number],
    output: &mut [Number],
    config: &Conv1DConfig,
) {
    let samples = config.samples;
    let taps = config.kernel_size;
    let out_len = config.output_samples();
    debug_assert_eq!(input.len(), config.in_channels * samples);
    debug_assert_eq!(kernel.len(), config.filters * config.in_channels * taps);
    debug_assert_eq!(bias.len(), config.filters);
    debug_assert_eq!(output.len(), config.filters * out_len);

    let filters = kernel.chunks_exact(config.in_channels * taps).zip(bias);
    for ((filter, &b), out_row) in filters.zip(output.chunks_exact_mut(out_len)) {
        for (pos, out) in out_row.iter_mut().enumerate() {
            let origin = pos * config.stride;
            let mut acc: LongNumber = 0;
            for (channel, weights) in input.chunks_exact(samples).zip(filter.chunks_exact(taps)) {
                let mut kernel_mac: LongNumber = 0;
                for (t, &w) in weights.iter().enumerate() {
                    let tap = (origin + t)
                        .checked_sub(config.padding_left)
                        .and_then(|x| channel.get(x));
                    if let Some(&x) = tap {
                        kernel_mac = kernel_mac.wrapping_add(LongNumber::from(x) * LongNumber::from(w));
                    }
                }
                acc = acc.wrapping_add(kernel_mac);
            }
            let acc = Fixed::<Q>::scale(acc).wrapping_add(LongNumber::from(b));
            *out = config.activation.apply(acc);
        }
    }
}

// =============================================================================
// Fully connected
// =============================================================================

/// Dense layer: `output[u] = act(scale(Σ input[m] * weights[u][m]) + bias[u])`.
///
/// Weights: [units × in_features] row-major.
///
/// `config`, `weights` and `bias` must be accepted by `Dense::new`; `input`
/// holds `in_features` elements and `output` holds `units`.
pub fn fully_connected<const Q: u32>(
    input: &[Number],
    weights: &[Number],
    bias: &[Number],
    output: &mut [Number],
    config: &DenseConfig,
) {
    debug_assert_eq!(input.len(), config.in_features);
    debug_assert_eq!(weights.len(), config.units * config.in_features);
    debug_assert_eq!(bias.len(), config.units);
    debug_assert_eq!(output.len(), config.units);

    let rows = weights.chunks_exact(config.in_features).zip(bias);
    for ((row, &b), out) in rows.zip(output.iter_mut()) {
        let acc = row.iter().zip(input).fold(0 as LongNumber, |acc, (&w, &x)| {
            acc.wrapping_add(LongNumber::from(w) * LongNumber::from(x))
        });
        let acc = Fixed::<Q>::scale(acc).wrapping_add(LongNumber::from(b));
        *out = config.activation.apply(acc);
    }
}

// =============================================================================
// Readout
// =============================================================================

/// Index of the largest value; the first one wins on ties.
pub fn argmax(data: &[Number]) -> Option<usize> {
    let mut best: Option<(usize, Number)> = None;
    for (i, &v) in data.iter().enumerate() {
        match best {
            Some((_, max)) if v <= max => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_lengths() {
        assert_eq!(pool_output_len(100, 4, 3, 0), 33);
        assert_eq!(pool_output_len(8, 2, 2, 0), 4);
        assert_eq!(pool_output_len(9, 2, 2, 0), 4);
        assert_eq!(conv1d_output_len(33, 8, 1, 0, 0), 26);
        assert_eq!(conv1d_output_len(10, 3, 1, 1, 1), 10);
        assert_eq!(conv1d_output_len(10, 3, 2, 0, 0), 4);
    }

    #[test]
    fn overlapping_pool_windows() {
        let config = PoolConfig {
            channels: 1,
            samples: 6,
            pool_size: 3,
            stride: 1,
            padding: 0,
            activation: Activation::Linear,
        };
        let input = [1, 5, 2, -3, -4, -1];
        let mut output = [0; 4];
        max_pool_1d(&input, &mut output, &config);
        assert_eq!(output, [5, 5, 2, -1]);
    }

    #[test]
    fn dense_without_scaling() {
        let config = DenseConfig { in_features: 3, units: 2, activation: Activation::Linear };
        let weights = [1, 2, 3, -1, -1, -1];
        let mut output = [0; 2];
        fully_connected::<0>(&[1, 1, 1], &weights, &[10, 0], &mut output, &config);
        assert_eq!(output, [16, -3]);
    }

    #[test]
    fn argmax_prefers_first_maximum() {
        assert_eq!(argmax(&[3, -1, 10, 10, 0]), Some(2));
        assert_eq!(argmax(&[-5]), Some(0));
        assert_eq!(argmax(&[]), None);
    }
}
