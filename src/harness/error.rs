use std::io;
use thiserror::Error;

/// Failure of one harness stage. Every variant maps to process exit code 1;
/// the message is the single line shown to the user.
#[derive(Debug, Error)]
pub enum HarnessError {
  /// The trace argument matched none of the candidate locations.
  #[error("Error: Trace file '{trace}' not found.")]
  TraceNotFound { trace: String },

  /// The toolchain exited non-zero. Diagnostics already reached the user
  /// through the inherited streams.
  #[error("Compilation failed.")]
  Compile,

  /// The simulator exited non-zero.
  #[error("Execution failed.")]
  Execution { code: Option<i32> },

  /// Spawn or filesystem failure before a child could report a status.
  #[error("Error: {0}")]
  Io(#[from] io::Error),
}
