//! End-to-end estimation of one qROM instance.

use std::path::Path;

use qrom_pla::{read_exorcised, write_qrom_pla_file};

use crate::accountant::{Resources, estimate};
use crate::error::EstimateError;
use crate::minimizer::Minimizer;

/// Estimate the Clifford+T resources of one qROM instance.
///
/// Encodes the truth table as `qrom.pla` under `workdir`, runs the
/// minimizer on it producing `qrom.exorcised`, then tallies and accounts
/// the result. Both artifacts are left in `workdir` for inspection; reruns
/// overwrite them. Nothing is cached: identical inputs are recomputed.
pub fn estimate_qrom(
    address_bits: u32,
    ones_addresses: &[u64],
    minimizer: &dyn Minimizer,
    workdir: &Path,
) -> Result<Resources, EstimateError> {
    let pla = workdir.join("qrom.pla");
    let exorcised = workdir.join("qrom.exorcised");

    write_qrom_pla_file(&pla, address_bits, ones_addresses)?;
    minimizer.minimize(&pla, &exorcised)?;

    let tally = read_exorcised(&exorcised)?;
    estimate(&tally)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    /// Minimizer stub that writes a canned gate list, framed the way the
    /// real tool frames it, without touching the PLA beyond checking it
    /// exists.
    struct CannedMinimizer {
        body: Vec<&'static str>,
    }

    impl Minimizer for CannedMinimizer {
        fn minimize(&self, pla: &Path, out: &Path) -> Result<(), EstimateError> {
            assert!(pla.exists(), "pipeline must write the PLA first");
            let mut lines: Vec<String> = (0..qrom_pla::HEADER_LINES)
                .map(|i| format!("# header {i}"))
                .collect();
            lines.extend(self.body.iter().map(|s| s.to_string()));
            lines.push(".e".to_string());
            fs::write(out, lines.join("\n"))?;
            Ok(())
        }
    }

    #[test]
    fn test_pipeline_with_stub_minimizer() {
        let dir = tempfile::tempdir().unwrap();
        let minimizer = CannedMinimizer {
            body: vec!["11111 1"; 6],
        };

        let resources = estimate_qrom(5, &[3, 7, 11, 19, 23, 31], &minimizer, dir.path()).unwrap();
        assert_eq!(resources.width, 10);
        assert_eq!(resources.depth, 480);
        assert_eq!(resources.t_count, 240);

        // Encoder output is the real artifact the stub was handed.
        let pla = fs::read_to_string(dir.path().join("qrom.pla")).unwrap();
        assert!(pla.starts_with(".i 5\n.o 1\n.type esop\n"));
        assert!(pla.contains("\n00011 1\n"));
        assert!(pla.ends_with(".e\n"));
    }

    #[test]
    fn test_pipeline_rejects_empty_minimizer_output() {
        let dir = tempfile::tempdir().unwrap();
        let minimizer = CannedMinimizer { body: vec![] };
        let err = estimate_qrom(4, &[1, 2], &minimizer, dir.path()).unwrap_err();
        assert!(matches!(err, EstimateError::EmptyCircuit));
    }

    #[test]
    fn test_pipeline_propagates_encoder_errors() {
        let dir = tempfile::tempdir().unwrap();
        let minimizer = CannedMinimizer { body: vec![] };
        // Address 16 does not fit in 4 bits; the minimizer never runs.
        let err = estimate_qrom(4, &[16], &minimizer, dir.path()).unwrap_err();
        assert!(matches!(err, EstimateError::Pla(_)));
    }
}
