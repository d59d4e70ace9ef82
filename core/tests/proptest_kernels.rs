//! Property tests: kernels against a wide-integer reference.

use fxcnn_core::*;
use proptest::prelude::*;

const Q: u32 = 4;

fn reference_out(acc: i64, bias: Number, activation: Activation) -> Number {
    let value = (acc >> Q) + i64::from(bias);
    let value = value.clamp(i64::from(NUMBER_MIN), i64::from(NUMBER_MAX)) as Number;
    match activation {
        Activation::Linear => value,
        Activation::ReLU => value.max(0),
    }
}

fn activation() -> impl Strategy<Value = Activation> {
    prop_oneof![Just(Activation::Linear), Just(Activation::ReLU)]
}

fn conv_config() -> impl Strategy<Value = Conv1DConfig> {
    (1usize..=3, 4usize..=12, 1usize..=3, 1usize..=4, 1usize..=3, 0usize..=2, 0usize..=2, activation()).prop_map(
        |(in_channels, samples, filters, kernel_size, stride, padding_left, padding_right, activation)| {
            Conv1DConfig {
                in_channels,
                samples,
                filters,
                kernel_size,
                stride,
                padding_left,
                padding_right,
                activation,
            }
        },
    )
}

fn naive_conv(input: &[Number], kernel: &[Number], bias: &[Number], config: &Conv1DConfig) -> Vec<Number> {
    let out_len = config.output_samples();
    let mut out = Vec::with_capacity(config.filters * out_len);
    for f in 0..config.filters {
        for p in 0..out_len {
            let mut acc = 0i64;
            for c in 0..config.in_channels {
                for t in 0..config.kernel_size {
                    let pos = (p * config.stride + t) as i64 - config.padding_left as i64;
                    if pos < 0 || pos >= config.samples as i64 {
                        continue;
                    }
                    let x = input[c * config.samples + pos as usize];
                    let w = kernel[(f * config.in_channels + c) * config.kernel_size + t];
                    acc += i64::from(x) * i64::from(w);
                }
            }
            out.push(reference_out(acc, bias[f], config.activation));
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_pool_length_formula(samples in 1usize..200, pool_size in 1usize..10, stride in 1usize..6) {
        prop_assume!(pool_size <= samples);
        let len = pool_output_len(samples, pool_size, stride, 0);
        prop_assert_eq!(len, (samples - pool_size) / stride + 1);
        // The last window ends inside the input; one more would not.
        prop_assert!((len - 1) * stride + pool_size <= samples);
        prop_assert!(len * stride + pool_size > samples);
    }

    #[test]
    fn prop_pool_is_window_max(
        data in prop::collection::vec(any::<Number>(), 24),
        channels in 1usize..=3,
        pool_size in 1usize..=4,
        stride in 1usize..=4,
        activation in activation(),
    ) {
        let samples = 8;
        let config = PoolConfig { channels, samples, pool_size, stride, padding: 0, activation };
        let out_len = config.output_samples();
        let input = &data[..channels * samples];
        let mut output = vec![0 as Number; channels * out_len];
        max_pool_1d(input, &mut output, &config);

        for c in 0..channels {
            for p in 0..out_len {
                let window = &input[c * samples + p * stride..][..pool_size];
                let mut expected = *window.iter().max().unwrap();
                if activation == Activation::ReLU {
                    expected = expected.max(0);
                }
                prop_assert_eq!(output[c * out_len + p], expected);
            }
        }
    }

    #[test]
    fn prop_conv_matches_reference(
        config in conv_config(),
        input in prop::collection::vec(-100 as Number..100, 36),
        kernel in prop::collection::vec(-100 as Number..100, 36),
        bias in prop::collection::vec(any::<Number>(), 3),
    ) {
        prop_assume!(config.kernel_size <= config.samples + config.padding_left + config.padding_right);
        let input = &input[..config.in_channels * config.samples];
        let kernel = &kernel[..config.kernel_len()];
        let bias = &bias[..config.filters];

        let mut output = vec![0 as Number; config.output_shape().total()];
        conv1d::<Q>(input, kernel, bias, &mut output, &config);
        prop_assert_eq!(output, naive_conv(input, kernel, bias, &config));
    }

    #[test]
    fn prop_dense_matches_reference(
        in_features in 1usize..=16,
        units in 1usize..=4,
        activation in activation(),
        input in prop::collection::vec(-10_000 as Number..10_000, 16),
        weights in prop::collection::vec(-10_000 as Number..10_000, 64),
        bias in prop::collection::vec(any::<Number>(), 4),
    ) {
        // 16 products of |x| < 10^4 stay inside i32.
        let config = DenseConfig { in_features, units, activation };
        let input = &input[..in_features];
        let weights = &weights[..units * in_features];
        let mut output = vec![0 as Number; units];
        fully_connected::<Q>(input, weights, &bias[..units], &mut output, &config);

        for u in 0..units {
            let acc: i64 = input
                .iter()
                .zip(&weights[u * in_features..][..in_features])
                .map(|(&x, &w)| i64::from(x) * i64::from(w))
                .sum();
            prop_assert_eq!(output[u], reference_out(acc, bias[u], activation));
        }
    }

    #[test]
    fn prop_relu_output_is_non_negative(
        input in prop::collection::vec(any::<Number>(), 8),
        weights in prop::collection::vec(any::<Number>(), 24),
        bias in prop::collection::vec(any::<Number>(), 3),
    ) {
        let config = DenseConfig { in_features: 8, units: 3, activation: Activation::ReLU };
        let mut output = [0 as Number; 3];
        fully_connected::<9>(&input, &weights, &bias, &mut output, &config);
        prop_assert!(output.iter().all(|&v| v >= 0));
    }

    #[test]
    fn prop_scale_is_floor_division(value in any::<LongNumber>()) {
        let expected = (i64::from(value) as f64 / f64::from(1u32 << 9)).floor() as LongNumber;
        prop_assert_eq!(Fixed::<9>::scale(value), expected);
    }

    #[test]
    fn prop_gsc_forward_is_deterministic(frame in prop::collection::vec(any::<Number>(), 100)) {
        let model = models::gsc::variant_a().unwrap();
        let input = Tensor::from_slice(&frame).unwrap();
        let mut scratch = [0 as Number; models::gsc::SCRATCH_LEN];
        let mut first = Tensor::zeros();
        let mut second = Tensor::zeros();

        model.arena(&mut scratch).unwrap().forward(&input, &mut first);
        let mut arena = model.arena(&mut scratch).unwrap();
        arena.clear();
        arena.forward(&input, &mut second);
        prop_assert_eq!(first, second);
    }
}
