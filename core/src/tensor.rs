//! Fixed-size tensor of `Number`s with the element count in the type.
//!
//! A single const generic `N` carries the total element count;
//! `generic_const_exprs` is unstable, so `CHANNELS * SAMPLES` cannot appear in
//! a type. The channel/sample split lives in the model's `Shape`.

use crate::error::{FxError, FxResult};
use crate::number::Number;

/// Owned `[Number; N]`, used for model inputs and outputs.
///
/// Layout is channel-major: `[channel][sample]` flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tensor<const N: usize> {
    data: [Number; N],
}

impl<const N: usize> Tensor<N> {
    pub const fn zeros() -> Self {
        Self { data: [0; N] }
    }

    pub const fn from_array(data: [Number; N]) -> Self {
        Self { data }
    }

    pub fn from_slice(slice: &[Number]) -> FxResult<Self> {
        if slice.len() != N {
            return Err(FxError::DimensionMismatch {
                expected: N,
                actual: slice.len(),
            });
        }
        let mut data = [0; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Build from a `[channels][samples]` array, as produced by a sensor
    /// front-end.
    pub fn from_channels<const C: usize, const L: usize>(channels: &[[Number; L]; C]) -> FxResult<Self> {
        if C * L != N {
            return Err(FxError::DimensionMismatch {
                expected: N,
                actual: C * L,
            });
        }
        let mut data = [0; N];
        for (dst, src) in data.chunks_exact_mut(L.max(1)).zip(channels) {
            dst.copy_from_slice(src);
        }
        Ok(Self { data })
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<Number> {
        self.data.get(index).copied()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[Number] {
        &self.data
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [Number] {
        &mut self.data
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<const N: usize> Default for Tensor<N> {
    fn default() -> Self {
        Self::zeros()
    }
}
