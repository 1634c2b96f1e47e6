use super::*;

/// Identifier of one story in the ranking.
///
/// Only non-negative JSON integers decode, since ids are formatted straight
/// into item request paths.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub(crate) struct StoryId(u64);

impl Display for StoryId {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
impl From<u64> for StoryId {
  fn from(id: u64) -> Self {
    Self(id)
  }
}
