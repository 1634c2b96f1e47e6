use {
  super::*,
  tracing_appender::non_blocking::WorkerGuard,
  tracing_subscriber::EnvFilter,
};

const LOG_FILE_NAME: &str = "hn-stats.log";

/// Routes `tracing` output to a daily log file under `directory`, the
/// terminal belongs to the interface. Records are written until the
/// returned guard is dropped.
pub(crate) fn initialize(directory: &Path) -> Result<WorkerGuard> {
  fs::create_dir_all(directory).with_context(|| {
    format!("could not create log directory {}", directory.display())
  })?;

  let (writer, guard) = tracing_appender::non_blocking(
    tracing_appender::rolling::daily(directory, LOG_FILE_NAME),
  );

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(writer)
    .with_ansi(false)
    .with_target(false)
    .try_init()
    .map_err(|error| anyhow!("could not install log subscriber: {error}"))?;

  Ok(guard)
}
