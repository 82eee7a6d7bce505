use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logger once. `RUST_LOG` controls verbosity; the default
/// keeps the child's output free of harness noise.
pub fn init_log() {
  INIT.call_once(|| {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
      .format_timestamp(None)
      .init();
  });
}
