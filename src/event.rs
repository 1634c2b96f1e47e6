use super::*;

pub(crate) enum Event {
  Metrics { request_id: u64, state: FetchState },
}
