use std::path::{Path, PathBuf};

use super::config::HarnessConfig;
use super::error::HarnessError;

/// Resolve the trace argument against the candidate locations, first match
/// wins:
/// 1. absolute path, used as-is (existence still checked, no fallback);
/// 2. relative to the working directory;
/// 3. relative to the configured trace directory.
pub fn resolve_trace(config: &HarnessConfig, trace_arg: &str) -> Result<PathBuf, HarnessError> {
  let path = Path::new(trace_arg);

  if path.is_absolute() {
    if path.exists() {
      return Ok(path.to_path_buf());
    }
    return Err(HarnessError::TraceNotFound {
      trace: trace_arg.to_string(),
    });
  }

  let in_work_dir = config.work_dir.join(path);
  if in_work_dir.exists() {
    return Ok(in_work_dir);
  }

  let in_trace_dir = config.trace_dir().join(path);
  if in_trace_dir.exists() {
    return Ok(in_trace_dir);
  }

  Err(HarnessError::TraceNotFound {
    trace: trace_arg.to_string(),
  })
}
