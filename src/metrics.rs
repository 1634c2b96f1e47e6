use super::*;

/// Chart-ready labels and values for one dataset, in rank order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MetricsSeries {
  pub(crate) label: &'static str,
  pub(crate) labels: Vec<String>,
  pub(crate) values: Vec<Option<u64>>,
}

impl MetricsSeries {
  pub(crate) const COMMENTS: &str = "Comments";

  pub(crate) const UPVOTES: &str = "Upvotes";

  /// Builds the upvotes and comments series, in that order, from details
  /// already in rank order.
  pub(crate) fn from_stories(stories: &[StoryDetail]) -> (Self, Self) {
    let labels = stories
      .iter()
      .map(|story| story.title.clone().unwrap_or_default())
      .collect::<Vec<_>>();

    let upvotes = Self {
      label: Self::UPVOTES,
      labels: labels.clone(),
      values: stories.iter().map(|story| story.score).collect(),
    };

    let comments = Self {
      label: Self::COMMENTS,
      labels,
      values: stories.iter().map(|story| story.descendants).collect(),
    };

    (upvotes, comments)
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.values.len()
  }

  pub(crate) fn points(&self) -> impl Iterator<Item = (&str, Option<u64>)> {
    self
      .labels
      .iter()
      .map(String::as_str)
      .zip(self.values.iter().copied())
  }
}
