//! Reference networks shipped with the library.
//!
//! Each model is a list of `static` layers over constant weight tables plus
//! the shape constants a caller needs to size its buffers. Variants that
//! share an architecture share the constants and the layer types; only the
//! weight tables differ.

pub mod baseline;
pub mod gsc;
pub mod readout8;
pub mod weights;
