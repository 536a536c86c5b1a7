//! Runtime preferences for a conversion, built by the CLI.

use crate::tape::VarFraming;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefs {
    /// Layout of the variable-length output records.
    pub framing: VarFraming,
    /// Re-read the output after converting and compare it with the input.
    pub verify: bool,
    /// Print progress markers to stdout.
    pub progress: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            framing: VarFraming::Counted,
            verify: false,
            progress: true,
        }
    }
}

impl Prefs {
    pub fn with_framing(mut self, framing: VarFraming) -> Self {
        self.framing = framing;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}
