use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum FetchState {
  /// The cause is kept for the log only, the view shows a generic message.
  Error(String),
  Loading,
  Ready {
    comments: MetricsSeries,
    upvotes: MetricsSeries,
  },
}

impl From<Result<(MetricsSeries, MetricsSeries), FetchError>> for FetchState {
  fn from(result: Result<(MetricsSeries, MetricsSeries), FetchError>) -> Self {
    match result {
      Ok((upvotes, comments)) => Self::Ready { comments, upvotes },
      Err(error) => Self::Error(format!("{:#}", anyhow::Error::from(error))),
    }
  }
}

impl FetchState {
  pub(crate) fn is_loading(&self) -> bool {
    matches!(self, Self::Loading)
  }

  /// Moves out of `Loading` into a settled state. Returns false, leaving the
  /// state untouched, if it has already settled or `outcome` is not settled.
  pub(crate) fn settle(&mut self, outcome: FetchState) -> bool {
    if !self.is_loading() || outcome.is_loading() {
      return false;
    }

    *self = outcome;

    true
  }
}
