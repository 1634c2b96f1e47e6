use super::*;

#[derive(Debug)]
pub(crate) enum Effect {
  FetchMetrics {
    limit: NonZeroUsize,
    registration: AbortRegistration,
    request_id: u64,
  },
}
