//! Resource accounting over a control-count tally.

use std::fmt;

use qrom_mpmct::{CostRule, GateCosts};
use qrom_pla::ControlTally;

use crate::error::EstimateError;

/// Estimated Clifford+T resources for one minimized qROM circuit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resources {
    /// Total qubits: address bits, one target, and ancillas.
    pub width: u64,
    /// Circuit depth.
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

impl Resources {
    /// Header for the CSV sink format.
    pub const CSV_FIELDS: &'static str = "width,depth,tc,td,h,cnot";

    /// Render as a CSV row fragment matching [`Resources::CSV_FIELDS`].
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.width, self.depth, self.t_count, self.t_depth, self.h_count, self.cnot_count
        )
    }
}

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Width (qubits):  {}", self.width)?;
        writeln!(f, "Depth:           {}", self.depth)?;
        writeln!(f, "T-count:         {}", self.t_count)?;
        writeln!(f, "T-depth:         {}", self.t_depth)?;
        writeln!(f, "Hadamard count:  {}", self.h_count)?;
        write!(f, "CNOT count:      {}", self.cnot_count)
    }
}

/// Account a control-count tally into a worst-case resource vector.
///
/// The qubit width covers the control-string width, one target, and the
/// ancillas demanded by the largest gate present: that gate needs up to
/// `largest - 1` borrowed qubits, and the address bits it does not control
/// can serve, so the fresh-ancilla bound is
/// `max(0, 2*largest - num_total_controls - 1)`.
///
/// Every other component is a straight per-class sum via
/// [`CostRule::class_costs`]; no gate ordering or cross-class interaction
/// is modeled.
///
/// An empty tally has no largest gate and fails with
/// [`EstimateError::EmptyCircuit`].
pub fn estimate(tally: &ControlTally) -> Result<Resources, EstimateError> {
    let num_total_controls = tally
        .num_total_controls()
        .ok_or(EstimateError::EmptyCircuit)?;
    let largest = tally.largest().ok_or(EstimateError::EmptyCircuit)?;

    let ancillas = (2 * largest as u64).saturating_sub(num_total_controls as u64 + 1);
    let width = num_total_controls as u64 + 1 + ancillas;

    let mut totals = GateCosts::default();
    for (controls, occurrences) in tally.iter() {
        let rule = CostRule::for_controls(controls)?;
        totals = totals.add(rule.class_costs(occurrences));
    }

    Ok(Resources {
        width,
        depth: totals.depth,
        t_count: totals.t_count,
        t_depth: totals.t_depth,
        h_count: totals.h_count,
        cnot_count: totals.cnot_count,
    })
}
