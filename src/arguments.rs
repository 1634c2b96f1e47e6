use super::*;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Chart upvotes and comments of the current Hacker News top stories"
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    env = "HN_STATS_API_BASE_URL",
    default_value = Client::DEFAULT_API_BASE_URL,
    help = "Root of the Hacker News API"
  )]
  pub(crate) api_base_url: String,
  #[arg(
    long,
    env = "HN_STATS_LIMIT",
    default_value = "10",
    help = "Number of top stories to chart"
  )]
  pub(crate) limit: NonZeroUsize,
  #[arg(
    long,
    env = "HN_STATS_LOG_DIR",
    help = "Directory for log files [default: $XDG_STATE_HOME/hn-stats]"
  )]
  pub(crate) log_dir: Option<PathBuf>,
  #[arg(
    long,
    env = "HN_STATS_ROUTE",
    default_value = "/",
    help = "Page to open on start, `/` or `/stats`"
  )]
  pub(crate) route: String,
  #[arg(
    long,
    env = "HN_STATS_TIMEOUT",
    default_value = "10",
    value_name = "SECONDS",
    help = "Timeout for each request, 0 waits forever"
  )]
  pub(crate) timeout: u64,
}

impl Arguments {
  pub(crate) fn initial_route(&self) -> Route {
    Route::from_path(&self.route)
  }

  pub(crate) fn log_dir(&self) -> Result<PathBuf> {
    if let Some(dir) = &self.log_dir {
      return Ok(dir.clone());
    }

    let base_dir = if let Ok(dir) = env::var("XDG_STATE_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".local").join("state")
    } else {
      env::current_dir()?.join(".local").join("state")
    };

    Ok(base_dir.join("hn-stats"))
  }

  pub(crate) fn request_timeout(&self) -> Option<Duration> {
    (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
  }
}
