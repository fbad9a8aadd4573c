//! Error types for PLA encoding and gate-list parsing.

use thiserror::Error;

/// Errors raised while writing a PLA file or parsing a minimized gate list.
#[derive(Debug, Error)]
pub enum PlaError {
    /// Reading or writing an artifact failed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The gate-list artifact does not match the expected shape.
    #[error("malformed gate list: {0}")]
    Format(String),

    /// An address does not fit in the declared number of address bits.
    ///
    /// Writing it anyway would widen one body line and corrupt the
    /// fixed-width format.
    #[error("address {address} does not fit in {bits} address bits")]
    AddressRange {
        /// The offending address.
        address: u64,
        /// The declared address-bit count.
        bits: u32,
    },
}
