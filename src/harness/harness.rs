use super::config::HarnessConfig;
use super::error::HarnessError;
use super::janitor;
use super::paths;
use super::runner::{Launcher, ProcessLauncher};
use super::toolchain::{CompilerToolchain, SourceManifest, Toolchain};

/// Sequences one invocation: resolve the trace, compile the simulator, run
/// it, clean the artifact. No stage is ever retried.
pub struct Harness {
  config: HarnessConfig,
  toolchain: Box<dyn Toolchain>,
  launcher: Box<dyn Launcher>,
}

impl Harness {
  pub fn new(config: HarnessConfig) -> Self {
    let toolchain = CompilerToolchain::new(&config.compiler);
    Self {
      config,
      toolchain: Box::new(toolchain),
      launcher: Box::new(ProcessLauncher),
    }
  }

  /// Substitute the external collaborators, for tests.
  pub fn with_collaborators(
    config: HarnessConfig,
    toolchain: Box<dyn Toolchain>,
    launcher: Box<dyn Launcher>,
  ) -> Self {
    Self {
      config,
      toolchain,
      launcher,
    }
  }

  pub fn run(&self, trace_arg: &str) -> Result<(), HarnessError> {
    let trace = paths::resolve_trace(&self.config, trace_arg)?;

    let output = self.config.output_path();
    let manifest = SourceManifest {
      sources: self.config.sources(),
      include_dirs: self.config.include_dirs(),
    };

    self.status("Compiling trace runner...");
    // A failed compile leaves no artifact, so there is nothing to clean.
    self.toolchain.compile(&manifest, &output)?;
    self.status("Compilation successful.");

    self.status(&format!("\nRunning trace: {}", trace.display()));
    self.status(&"-".repeat(40));
    let result = self.launcher.run(&output, &trace);
    self.status(&"-".repeat(40));

    // Cleanup runs whether the execution succeeded or not.
    if self.config.cleanup {
      janitor::remove_artifact(&output);
    }

    result
  }

  fn status(&self, line: &str) {
    if !self.config.quiet {
      println!("{}", line);
    }
  }
}
