use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn default_dot() -> PathBuf {
  PathBuf::from(".")
}

fn default_compiler() -> String {
  "g++".to_string()
}

fn default_sources() -> Vec<String> {
  vec![
    "trace/trace_runner.cpp".to_string(),
    "src/tlb.cpp".to_string(),
    "src/page_table.cpp".to_string(),
    "src/smmu.cpp".to_string(),
    "src/smmu_registers.cpp".to_string(),
  ]
}

fn default_include_dirs() -> Vec<String> {
  vec!["include".to_string()]
}

fn default_trace_dir() -> String {
  "trace".to_string()
}

fn default_output_name() -> String {
  "trace_runner".to_string()
}

fn default_cleanup() -> bool {
  true
}

/// Harness configuration. The defaults reproduce the simulator project
/// layout; a TOML file may override any subset of the fields.
#[derive(Debug, Clone, Deserialize)]
pub struct HarnessConfig {
  /// Directory relative trace arguments are tried against first.
  #[serde(default = "default_dot")]
  pub work_dir: PathBuf,

  /// Base directory for relative manifest entries.
  #[serde(default = "default_dot")]
  pub project_root: PathBuf,

  /// Compiler driver program.
  #[serde(default = "default_compiler")]
  pub compiler: String,

  /// Simulator sources, compiled in this order.
  #[serde(default = "default_sources")]
  pub sources: Vec<String>,

  #[serde(default = "default_include_dirs")]
  pub include_dirs: Vec<String>,

  /// Fallback directory for relative trace paths.
  #[serde(default = "default_trace_dir")]
  pub trace_dir: String,

  /// File name of the compiled binary.
  #[serde(default = "default_output_name")]
  pub output_name: String,

  /// Directory the binary is written to. Defaults to the project root.
  #[serde(default)]
  pub output_dir: Option<String>,

  /// Remove the binary after the run.
  #[serde(default = "default_cleanup")]
  pub cleanup: bool,

  /// Suppress harness status lines (child output is unaffected).
  #[serde(default)]
  pub quiet: bool,
}

impl Default for HarnessConfig {
  fn default() -> Self {
    Self {
      work_dir: default_dot(),
      project_root: default_dot(),
      compiler: default_compiler(),
      sources: default_sources(),
      include_dirs: default_include_dirs(),
      trace_dir: default_trace_dir(),
      output_name: default_output_name(),
      output_dir: None,
      cleanup: default_cleanup(),
      quiet: false,
    }
  }
}

impl HarnessConfig {
  // Use absolute path directly, or join with project_root if relative
  fn anchor(&self, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
      path.to_path_buf()
    } else {
      self.project_root.join(path)
    }
  }

  pub fn sources(&self) -> Vec<PathBuf> {
    self.sources.iter().map(|s| self.anchor(s)).collect()
  }

  pub fn include_dirs(&self) -> Vec<PathBuf> {
    self.include_dirs.iter().map(|d| self.anchor(d)).collect()
  }

  pub fn trace_dir(&self) -> PathBuf {
    self.anchor(&self.trace_dir)
  }

  /// Where the build writes and the janitor deletes. Builder, runner and
  /// janitor all agree on this path within one invocation.
  pub fn output_path(&self) -> PathBuf {
    let dir = match &self.output_dir {
      Some(dir) => self.anchor(dir),
      None => self.project_root.clone(),
    };
    dir.join(&self.output_name)
  }
}

pub fn load_config(config_path: Option<&PathBuf>) -> io::Result<HarnessConfig> {
  let path = match config_path {
    Some(path) => path,
    None => return Ok(HarnessConfig::default()),
  };

  let content = fs::read_to_string(path)?;

  let config: HarnessConfig = toml::from_str(&content).map_err(|e| {
    io::Error::new(
      io::ErrorKind::InvalidData,
      format!("parse {} failed: {}", path.display(), e),
    )
  })?;

  Ok(config)
}
