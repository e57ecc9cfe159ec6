//! Fixed-width signed multi-word integer primitive
//!
//! This module defines [`FixedBignum`], a two's-complement signed integer
//! backed by a fixed number of 64-bit words, plus the cross-width word-slice
//! algorithms ([`slice_ops`]) that both `FixedBignum` and
//! [`crate::adaptive::AdaptiveInt`]'s dynamically-sized backend are built on.
//!
//! `FixedBignum` is not a general-purpose arbitrary-precision integer: it
//! implements exactly the operations the rest of this crate's width
//! discipline needs (add, subtract, truncated multiply, small-divisor
//! divmod, arbitrary-count shifts, signed comparison across widths) and
//! nothing more. There is no modular reduction and no Karatsuba-style fast
//! multiplication.

mod core_impl;
mod error;
pub mod slice_ops;

pub use core_impl::FixedBignum;
pub use error::ParseBignumError;
