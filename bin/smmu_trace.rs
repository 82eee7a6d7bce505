use clap::Parser;
use smmu_trace::harness::config::load_config;
use smmu_trace::log::init_log;
use smmu_trace::Harness;
use std::path::PathBuf;
use std::process;

/// SMMU trace runner tool
#[derive(Parser, Debug)]
#[command(name = "smmu-trace")]
#[command(version = "0.1.0")]
#[command(about = "Compile the SMMU simulator and run it against a trace", long_about = None)]
struct Args {
  /// Trace file, searched in the working directory, then the trace directory
  #[arg(value_name = "TRACE", default_value = "trace.csv")]
  trace: String,

  /// Harness configuration file (TOML)
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Leave the compiled binary on disk after the run
  #[arg(long)]
  keep_artifact: bool,

  /// Quiet mode (suppress harness status lines)
  #[arg(short, long)]
  quiet: bool,
}

fn main() {
  init_log();

  let args = Args::parse();

  let mut config = match load_config(args.config.as_ref()) {
    Ok(config) => config,
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  };
  if args.keep_artifact {
    config.cleanup = false;
  }
  if args.quiet {
    config.quiet = true;
  }
  let quiet = config.quiet;

  if !quiet {
    println!("=== SMMU Trace Runner Tool ===");
  }

  let harness = Harness::new(config);
  match harness.run(&args.trace) {
    Ok(()) => {
      if !quiet {
        println!("Done.");
      }
    }
    Err(e) => {
      eprintln!("{}", e);
      process::exit(1);
    }
  }
}
