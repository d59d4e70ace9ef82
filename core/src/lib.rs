//! # fxcnn-core: fixed-point 1-D CNN inference
//!
//! A `no_std` library for running small one-dimensional convolutional
//! networks on microcontrollers without an FPU or a heap allocator.
//!
//! ## Architecture
//!
//! - **Number format**: `i16` activations and weights in Q-format, `i32`
//!   accumulators, saturation at every layer boundary
//! - **Layer zoo**: MaxPool1D, Conv1D, Flatten, Dense with fused Linear/ReLU
//! - **Sequential model**: chain validated at build time, infallible forward
//! - **Activation arena**: two caller-owned regions reused in ping/pong order,
//!   bound to the model that sized them
//! - **Reference models**: the GSC keyword-spotting classifier and a linear
//!   baseline, weights in constant storage
//!
//! ## Usage
//!
//! ```
//! use fxcnn_core::models::gsc;
//! use fxcnn_core::Tensor;
//!
//! let model = gsc::variant_a()?;
//! let mut scratch = [0 as fxcnn_core::Number; gsc::SCRATCH_LEN];
//! let mut arena = model.arena(&mut scratch)?;
//!
//! let input = Tensor::zeros();
//! let mut output = Tensor::zeros();
//! arena.forward(&input, &mut output);
//! # Ok::<(), fxcnn_core::FxError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod error;
pub mod layers;
pub mod math;
pub mod model;
pub mod models;
pub mod number;
pub mod tensor;

pub use arena::{BufferPlan, Region};
pub use error::{FxError, FxResult};
pub use layers::{Conv1D, Conv1DConfig, Dense, DenseConfig, Flatten, Layer, MaxPool1D, PoolConfig, Shape};
pub use math::{argmax, conv1d, conv1d_output_len, fully_connected, max_pool_1d, pool_output_len};
pub use model::{ModelArena, SequentialModel, MAX_LAYERS};
pub use number::{clamp, Activation, Fixed, LongNumber, Number, FIXED_POINT, NUMBER_MAX, NUMBER_MIN};
pub use tensor::Tensor;
