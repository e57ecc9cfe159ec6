//! Exact-arithmetic 2D computational geometry kernel
//!
//! This crate provides low-level geometric building blocks that never round
//! and never carry an epsilon. Every predicate — orientation, in-circle,
//! segment intersection — is computed with enough integer precision that its
//! sign is the mathematically exact sign of the underlying polynomial, not an
//! approximation of it.
//!
//! The focus is on **correctness by construction**, not on breadth of
//! features. A small set of primitives is composed into a small set of
//! algorithms, and the width discipline that makes the primitives exact is
//! the load-bearing part of the design.
//!
//! # Module overview
//!
//! - `bignum`
//!   A fixed-width signed multi-word integer, generic over its word count.
//!   This is the only place two's-complement word-array arithmetic is
//!   implemented; every wider integer in the crate is built on it.
//!
//! - `adaptive`
//!   An integer tagged with a static bit budget. Construction picks the
//!   narrowest of a 32-bit, 64-bit, or `bignum`-backed representation that
//!   can hold the declared range, and arithmetic operators grow the budget
//!   of their result so that overflow is structurally impossible as long as
//!   operands respect their declared widths.
//!
//! - `point`
//!   2D points built from pairs of adaptive integers, plus the bounded-degree
//!   polynomial predicates (`ccw`, `is_in_circumcircle`, `segments_intersect`,
//!   `polygon_area_doubled`) that consume them.
//!
//! - `hull`
//!   Andrew's monotone-chain convex hull.
//!
//! - `minkowski`
//!   Minkowski sum of two convex polygons by angular merge of their edges.
//!
//! - `delaunay`
//!   Incremental randomized Delaunay triangulation with vertex-bucket point
//!   location and edge-flip repair.
//!
//! # Design goals
//!
//! - No floating point anywhere in a predicate's result path
//! - No silently truncating arithmetic: every operation's output width is
//!   provably wide enough for its inputs
//! - Minimal and explicit APIs; no attempt at a general-purpose bignum library
//!
//! This crate is not a substitute for an arbitrary-precision arithmetic
//! library. It implements exactly the operations exact 2D geometry needs and
//! no more.

pub mod adaptive;
pub mod bignum;
pub mod delaunay;
pub mod hull;
pub mod minkowski;
pub mod point;
