//! Fixed-point number format shared by every layer.
//!
//! Activations, weights and biases are `i16` values scaled by `2^Q`.
//! Products are accumulated in `i32`, shifted back by `Q` once per output
//! element and saturated into `i16` at the layer boundary. Nothing else in the
//! pipeline handles overflow.
//!
//! ```text
//! acc: i32 = Σ input[i] * weight[i]        (Q + Q fractional bits)
//! out: i16 = clamp((acc >> Q) + bias)      (Q fractional bits)
//! ```

/// Narrow scalar used for weights, biases and stored activations.
pub type Number = i16;

/// Wide accumulator used inside a layer's reduction loops only.
pub type LongNumber = i32;

pub const NUMBER_MIN: Number = Number::MIN;
pub const NUMBER_MAX: Number = Number::MAX;

/// Fractional bits of the shipped reference models.
pub const FIXED_POINT: u32 = 9;

/// Saturate an accumulator into the `Number` range.
#[inline(always)]
pub const fn clamp(acc: LongNumber) -> Number {
    if acc < NUMBER_MIN as LongNumber {
        NUMBER_MIN
    } else if acc > NUMBER_MAX as LongNumber {
        NUMBER_MAX
    } else {
        acc as Number
    }
}

/// Q-format marker. Zero-sized; `Q` is carried in the type so every layer of
/// a model is forced onto the same format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fixed<const Q: u32>;

impl<const Q: u32> Fixed<Q> {
    /// Raw representation of 1.0 in this format.
    pub const ONE: LongNumber = {
        let () = Self::VALID;
        1 << Q
    };

    // Evaluated on monomorphization: an out-of-range Q is a compile error.
    const VALID: () = assert!(
        Q < Number::BITS,
        "fractional bits must leave room for the integer part of a Number"
    );

    /// Drop `Q` fractional bits from a product sum.
    ///
    /// Arithmetic shift, so negative values round toward negative infinity.
    /// Identity for `Q == 0`.
    #[inline(always)]
    pub const fn scale(acc: LongNumber) -> LongNumber {
        let () = Self::VALID;
        acc >> Q
    }

    #[inline(always)]
    pub const fn clamp(acc: LongNumber) -> Number {
        clamp(acc)
    }
}

/// Nonlinearity fused into the pooling, convolution and dense kernels.
///
/// Chosen once per layer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Activation {
    #[default]
    Linear,
    ReLU,
}

impl Activation {
    /// Finish one output element: rectify (if configured), then saturate.
    #[inline(always)]
    pub const fn apply(self, acc: LongNumber) -> Number {
        match self {
            Activation::Linear => clamp(acc),
            Activation::ReLU => {
                if acc < 0 {
                    0
                } else {
                    clamp(acc)
                }
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Activation::Linear => "linear",
            Activation::ReLU => "relu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_floors_toward_negative_infinity() {
        assert_eq!(Fixed::<9>::scale(1024), 2);
        assert_eq!(Fixed::<9>::scale(1023), 1);
        assert_eq!(Fixed::<9>::scale(-1), -1);
        assert_eq!(Fixed::<9>::scale(-512), -1);
        assert_eq!(Fixed::<9>::scale(-513), -2);
    }

    #[test]
    fn scale_is_identity_without_fractional_bits() {
        for acc in [LongNumber::MIN, -7, 0, 7, LongNumber::MAX] {
            assert_eq!(Fixed::<0>::scale(acc), acc);
        }
    }

    #[test]
    fn one_matches_q() {
        assert_eq!(Fixed::<9>::ONE, 512);
        assert_eq!(Fixed::<0>::ONE, 1);
    }

    #[test]
    fn clamp_pins_to_bounds() {
        assert_eq!(clamp(40_000), NUMBER_MAX);
        assert_eq!(clamp(-40_000), NUMBER_MIN);
        assert_eq!(clamp(32_767), 32_767);
        assert_eq!(clamp(-32_768), -32_768);
        assert_eq!(Fixed::<3>::clamp(-5), -5);
    }

    #[test]
    fn relu_zeroes_non_positive() {
        assert_eq!(Activation::ReLU.apply(-1), 0);
        assert_eq!(Activation::ReLU.apply(0), 0);
        assert_eq!(Activation::ReLU.apply(5), 5);
        assert_eq!(Activation::ReLU.apply(100_000), NUMBER_MAX);
        assert_eq!(Activation::ReLU.apply(LongNumber::MIN), 0);
    }

    #[test]
    fn linear_keeps_sign() {
        assert_eq!(Activation::Linear.apply(-1), -1);
        assert_eq!(Activation::Linear.apply(-100_000), NUMBER_MIN);
    }
}
