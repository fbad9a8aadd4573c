//! Per-class cost rules for MPMCT gates.

use thiserror::Error;

use crate::cost;

/// Cost model asked about a control count it has no rule for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cost rule for a gate with {controls} controls")]
pub struct DomainError {
    /// The offending control count.
    pub controls: u32,
}

/// Clifford+T contribution of one class of MPMCT gates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateCosts {
    /// Circuit depth contribution.
    pub depth: u64,
    /// T gates, counting both T and its inverse.
    pub t_count: u64,
    /// Layers containing at least one T or T-dagger.
    pub t_depth: u64,
    /// Hadamard gates.
    pub h_count: u64,
    /// CNOT gates.
    pub cnot_count: u64,
}

impl GateCosts {
    /// Element-wise sum of two contributions.
    pub fn add(self, other: GateCosts) -> GateCosts {
        GateCosts {
            depth: self.depth + other.depth,
            t_count: self.t_count + other.t_count,
            t_depth: self.t_depth + other.t_depth,
            h_count: self.h_count + other.h_count,
            cnot_count: self.cnot_count + other.cnot_count,
        }
    }
}

/// Decomposition rule for an MPMCT gate, selected by control count.
///
/// Small gates use exact tabulated decompositions; anything with four or
/// more controls falls through to the linear formulas in [`cost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostRule {
    /// One control: a plain CNOT.
    Cnot,
    /// Two controls: the 7-T Toffoli decomposition.
    Toffoli,
    /// Three controls: three stacked Toffolis.
    // TODO: replace with a dedicated 3-control decomposition instead of
    // tripling the Toffoli numbers.
    ToffoliTriple,
    /// Four or more controls: the ancilla-borrowing construction.
    Borrowed(u32),
}

impl CostRule {
    /// Select the rule for a gate with `controls` control bits.
    ///
    /// A gate with zero controls has no decomposition in this model and
    /// yields a [`DomainError`].
    pub fn for_controls(controls: u32) -> Result<CostRule, DomainError> {
        match controls {
            0 => Err(DomainError { controls }),
            1 => Ok(CostRule::Cnot),
            2 => Ok(CostRule::Toffoli),
            3 => Ok(CostRule::ToffoliTriple),
            k => Ok(CostRule::Borrowed(k)),
        }
    }

    /// Total contribution of `occurrences` gates of this class.
    ///
    /// The CNOT class adds a flat 1 to depth for the whole class rather
    /// than 1 per gate; the other classes scale every component by the
    /// occurrence count.
    pub fn class_costs(&self, occurrences: u64) -> GateCosts {
        match *self {
            CostRule::Cnot => GateCosts {
                depth: 1,
                cnot_count: occurrences,
                ..GateCosts::default()
            },
            CostRule::Toffoli => GateCosts {
                depth: 10 * occurrences,
                t_count: 7 * occurrences,
                t_depth: 3 * occurrences,
                h_count: 2 * occurrences,
                cnot_count: 7 * occurrences,
            },
            CostRule::ToffoliTriple => GateCosts {
                depth: 27 * occurrences,
                t_count: 21 * occurrences,
                t_depth: 9 * occurrences,
                h_count: 6 * occurrences,
                cnot_count: 21 * occurrences,
            },
            CostRule::Borrowed(k) => GateCosts {
                depth: occurrences * cost::depth(k),
                t_count: occurrences * cost::t_count(k),
                t_depth: occurrences * cost::t_depth(k),
                h_count: occurrences * cost::h_count(k),
                cnot_count: occurrences * cost::cnot_count(k),
            },
        }
    }
}
