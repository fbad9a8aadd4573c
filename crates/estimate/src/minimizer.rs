//! External ESOP minimizer as an injected capability.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::EstimateError;

/// A logic minimizer that rewrites a PLA file into a minimized gate list.
///
/// Modeled as a whole-file handoff: consume the artifact at `pla`, produce
/// one at `out`. The pipeline only depends on this trait, so tests swap in
/// stubs that write canned gate lists instead of spawning anything.
pub trait Minimizer {
    /// Minimize the ESOP at `pla`, writing the gate list to `out`.
    fn minimize(&self, pla: &Path, out: &Path) -> Result<(), EstimateError>;
}

/// ABC's EXORCISM-4 minimizer, driven as a blocking subprocess.
///
/// Runs `abc -q "read_pla -x <pla>; &get; &exorcism /dev/stdout"` and
/// writes the captured stdout verbatim to the output path, preserving the
/// tool's fixed header/trailer framing that the gate-list parser expects.
/// A hung process blocks the calling worker; no timeout is applied.
#[derive(Debug, Clone)]
pub struct AbcExorcism {
    program: PathBuf,
}

impl AbcExorcism {
    /// Drive the ABC binary at `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Minimizer for AbcExorcism {
    fn minimize(&self, pla: &Path, out: &Path) -> Result<(), EstimateError> {
        let script = format!(
            "read_pla -x {}; &get; &exorcism /dev/stdout",
            pla.display()
        );
        let output = Command::new(&self.program).arg("-q").arg(&script).output()?;

        if !output.status.success() {
            return Err(EstimateError::Minimizer {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        fs::write(out, &output.stdout)?;
        Ok(())
    }
}
