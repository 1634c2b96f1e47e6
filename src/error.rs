use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum FetchError {
  #[error("failed to fetch story {id}")]
  Detail {
    id: StoryId,
    #[source]
    source: DetailError,
  },
  #[error("failed to fetch top stories")]
  Ranking(#[source] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum DetailError {
  #[error("item does not exist")]
  Missing,
  #[error(transparent)]
  Request(#[from] reqwest::Error),
}
