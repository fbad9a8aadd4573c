//! PLA/ESOP text formats for qROM lookup circuits.
//!
//! Two sides of the handoff with an external ESOP minimizer:
//!
//! - [`writer`] renders a qROM truth table (the set of addresses holding a 1)
//!   as a `.pla` file in ESOP form, the minimizer's input format.
//! - [`reader`] parses the minimizer's output gate list back into a
//!   [`ControlTally`], the per-control-count histogram that resource
//!   accounting runs on.
//!
//! The formats are line-oriented plain text and must be reproduced exactly;
//! they are the wire contract with the external tool.

mod error;
mod reader;
mod tally;
mod writer;

pub use error::PlaError;
pub use reader::{HEADER_LINES, TRAILER_LINES, parse_exorcised, read_exorcised};
pub use tally::ControlTally;
pub use writer::{write_qrom_pla, write_qrom_pla_file};
