//! Fixed-width 512-bit unsigned integer arithmetic.
//!
//! [`Uint512`] stores eight 64-bit words in big-endian word order and
//! provides full-width multiplication (512×512→1024 split into high and low
//! halves, plus a 512×64 variant with a single overflow word) and full-width
//! division (Knuth's Algorithm D, plus a 512÷64 variant with a scalar
//! remainder), together with the shifts, carry-aware addition and
//! subtraction, comparison, and formatting they rest on.
//!
//! Every operation is a pure function over plain values: no allocation, no
//! global state, and bit-identical results for identical inputs on every
//! platform.

mod u512;


pub use u512::{DivideByZero, ParseUintError, Uint512};
