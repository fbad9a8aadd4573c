//! Error type for the estimation pipeline.

use std::process::ExitStatus;

use qrom_mpmct::DomainError;
use qrom_pla::PlaError;
use thiserror::Error;

/// Errors raised while estimating the resources of one qROM instance.
///
/// No partial resource vector is ever returned: the pipeline either
/// produces a complete, consistent estimate or one of these.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Encoding or gate-list parsing failed.
    #[error(transparent)]
    Pla(#[from] PlaError),

    /// The cost model has no rule for a gate class in the tally.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The minimized gate list contains no gates, so no resource estimate
    /// is definable.
    #[error("minimized circuit contains no gates")]
    EmptyCircuit,

    /// The external minimizer exited unsuccessfully.
    #[error("minimizer exited with {status}: {stderr}")]
    Minimizer {
        /// Exit status of the minimizer process.
        status: ExitStatus,
        /// Captured stderr, trimmed.
        stderr: String,
    },

    /// Spawning the minimizer or moving its artifacts failed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
