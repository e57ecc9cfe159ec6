//! Bit-budget-tagged integers with overflow-free widening arithmetic
//!
//! [`AdaptiveInt`] pairs a value with a declared bit budget and picks the
//! narrowest of a native `i32`, a native `i64`, or a [`crate::bignum`]-backed
//! representation able to hold it ([`backend::Backend`]). Every arithmetic
//! operator computes its result's budget from its operands' budgets before
//! computing the result itself, so a computation built entirely from
//! `AdaptiveInt` values can never silently overflow: the budget always grows
//! to match what the operation can produce.

pub mod backend;
mod value;

pub use self::value::AdaptiveInt;
