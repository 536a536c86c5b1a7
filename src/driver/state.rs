//! The per-record state machine that tracks logical files.
//!
//! Feed it the length of each logical record in container order; it answers
//! with a [`Transition`] telling the driver whether to write the record and
//! what to report. The consecutive-EOF counter starts at 1, so a container
//! whose very first record is zero-length ends right there.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    AwaitingFirstRecordOfFile,
    InFile { block_size: u16 },
    SawOneEof,
    Done,
    Failed(FailureReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    InconsistentBlockSize { expected: u16, found: u16 },
}

/// Outcome of feeding one record length to the [`StateMachine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// First record of a new logical file; write it.
    FileStarted { file_no: u32, block_size: u16 },
    /// Another record of the current file; write it.
    RecordAccepted,
    /// Single terminator: the current file ended. Write it and continue.
    FileEnded { file_no: u32 },
    /// Second consecutive terminator: write it and stop.
    ContainerEnded,
    /// Length differs from the file's block size. Do not write; abort.
    Rejected { file_no: u32, expected: u16, found: u16 },
    /// The machine is already in a terminal state.
    Halted,
}

impl Transition {
    /// Whether the record that caused this transition is written.
    pub fn writes_record(&self) -> bool {
        !matches!(self, Transition::Rejected { .. } | Transition::Halted)
    }
}

#[derive(Debug, Clone)]
pub struct StateMachine {
    state: DriverState,
    eof_count: u32,
    file_no: u32,
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            state: DriverState::AwaitingFirstRecordOfFile,
            eof_count: 1,
            file_no: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn file_no(&self) -> u32 {
        self.file_no
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, DriverState::Done | DriverState::Failed(_))
    }

    /// Advance by one record of `length` bytes.
    pub fn step(&mut self, length: u16) -> Transition {
        if self.is_terminal() {
            return Transition::Halted;
        }

        if length == 0 {
            self.eof_count += 1;
            if self.eof_count >= 2 {
                self.state = DriverState::Done;
                return Transition::ContainerEnded;
            }
            self.state = DriverState::SawOneEof;
            return Transition::FileEnded {
                file_no: self.file_no,
            };
        }

        match self.state {
            DriverState::AwaitingFirstRecordOfFile | DriverState::SawOneEof => {
                self.file_no += 1;
                self.eof_count = 0;
                self.state = DriverState::InFile { block_size: length };
                Transition::FileStarted {
                    file_no: self.file_no,
                    block_size: length,
                }
            }
            DriverState::InFile { block_size } if block_size == length => {
                Transition::RecordAccepted
            }
            DriverState::InFile { block_size } => {
                self.state = DriverState::Failed(FailureReason::InconsistentBlockSize {
                    expected: block_size,
                    found: length,
                });
                Transition::Rejected {
                    file_no: self.file_no,
                    expected: block_size,
                    found: length,
                }
            }
            DriverState::Done | DriverState::Failed(_) => Transition::Halted,
        }
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}
