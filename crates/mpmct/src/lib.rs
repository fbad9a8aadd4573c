//! Clifford+T cost models for multi-controlled NOT (MPMCT) gates.
//!
//! An MPMCT gate flips a single target qubit iff every control qubit matches
//! its required polarity. Decomposing one into the Clifford+T gate set has a
//! cost that depends only on the number of controls, which makes the per-gate
//! accounting a closed dispatch on that count:
//!
//! - 1 control: a bare CNOT, no T gates at all.
//! - 2 controls: the standard 7-T Toffoli decomposition.
//! - 3 controls: three stacked Toffolis.
//! - 4+ controls: the ancilla-borrowing construction, whose costs are linear
//!   in the control count (see [`cost`]).
//!
//! [`CostRule`] is that dispatch; [`cost`] holds the asymptotic formulas.

mod cost;
mod rule;

pub use cost::{cnot_count, depth, h_count, t_count, t_depth};
pub use rule::{CostRule, DomainError, GateCosts};
