//! Worst-case Clifford+T resource estimation for minimized qROM circuits.
//!
//! The full path from a qROM truth table to a resource vector:
//!
//! 1. encode the table as a PLA/ESOP file (`qrom-pla`),
//! 2. hand it to an external ESOP minimizer (the [`Minimizer`] capability,
//!    usually ABC's EXORCISM-4),
//! 3. tally the minimized gate list by control count (`qrom-pla`),
//! 4. account the tally into qubit width, depth, T-count, T-depth,
//!    Hadamard count and CNOT count ([`estimate`]).
//!
//! The estimate is an upper bound: each gate class is charged its full
//! decomposition cost with no cross-gate cancellation or scheduling, and
//! the ancilla budget is derived from the largest gate alone.

mod accountant;
mod error;
mod minimizer;
mod pipeline;

pub use accountant::{Resources, estimate};
pub use error::EstimateError;
pub use minimizer::{AbcExorcism, Minimizer};
pub use pipeline::estimate_qrom;
