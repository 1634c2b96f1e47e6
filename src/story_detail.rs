use super::*;

/// The fields of an item that the charts need. Every field is optional on
/// the wire, a missing one stays missing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub(crate) struct StoryDetail {
  pub(crate) descendants: Option<u64>,
  pub(crate) score: Option<u64>,
  pub(crate) title: Option<String>,
}
