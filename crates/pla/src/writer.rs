//! qROM truth table to PLA/ESOP encoder.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::PlaError;

/// Write an n-bit qROM truth table as a PLA file in ESOP form.
///
/// `ones_addresses` lists the addresses holding a 1, each in `[0, 2^n)`;
/// the caller is responsible for not passing duplicates. Body lines are
/// written in slice order so the artifact is reproducible for a given
/// input ordering.
///
/// Format, consumed verbatim by the external minimizer:
///
/// ```text
/// .i <n>
/// .o 1
/// .type esop
/// <n-bit binary address> 1
/// ...
/// .e
/// ```
pub fn write_qrom_pla<W: Write>(
    writer: &mut W,
    address_bits: u32,
    ones_addresses: &[u64],
) -> Result<(), PlaError> {
    writeln!(writer, ".i {address_bits}")?;
    writeln!(writer, ".o 1")?;
    writeln!(writer, ".type esop")?;

    for &address in ones_addresses {
        if address_bits < 64 && address >> address_bits != 0 {
            return Err(PlaError::AddressRange {
                address,
                bits: address_bits,
            });
        }
        writeln!(
            writer,
            "{address:0width$b} 1",
            width = address_bits as usize
        )?;
    }

    writeln!(writer, ".e")?;
    Ok(())
}

/// Write the PLA encoding of a qROM to a file, buffered.
///
/// The file is created (or truncated) at `path`; a failed write leaves
/// whatever partial content made it to disk, and retrying overwrites it.
pub fn write_qrom_pla_file(
    path: &Path,
    address_bits: u32,
    ones_addresses: &[u64],
) -> Result<(), PlaError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_qrom_pla(&mut writer, address_bits, ones_addresses)?;
    writer.flush()?;
    Ok(())
}
