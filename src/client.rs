use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  pub(crate) const DEFAULT_API_BASE_URL: &str =
    "https://hacker-news.firebaseio.com/v0";

  async fn fetch_detail(
    &self,
    id: &StoryId,
  ) -> Result<StoryDetail, DetailError> {
    self
      .client
      .get(format!("{}/item/{id}.json", self.base_url))
      .send()
      .await?
      .error_for_status()?
      .json::<Option<StoryDetail>>()
      .await?
      .ok_or(DetailError::Missing)
  }

  /// Fetches the ranking, then the details of its first `limit` stories
  /// concurrently. Every detail request runs to completion, and the first
  /// failure in rank order fails the whole batch.
  pub(crate) async fn fetch_metrics(
    &self,
    limit: NonZeroUsize,
  ) -> Result<(MetricsSeries, MetricsSeries), FetchError> {
    let story_ids = self
      .fetch_ranking()
      .await
      .map_err(FetchError::Ranking)?
      .into_iter()
      .take(limit.get())
      .collect::<Vec<_>>();

    debug!(count = story_ids.len(), "fetching story details");

    let responses =
      join_all(story_ids.iter().map(|id| self.fetch_detail(id))).await;

    let mut stories = Vec::with_capacity(responses.len());

    for (id, response) in story_ids.into_iter().zip(responses) {
      stories
        .push(response.map_err(|source| FetchError::Detail { id, source })?);
    }

    Ok(MetricsSeries::from_stories(&stories))
  }

  async fn fetch_ranking(&self) -> Result<Vec<StoryId>, reqwest::Error> {
    self
      .client
      .get(format!("{}/topstories.json", self.base_url))
      .send()
      .await?
      .error_for_status()?
      .json::<Vec<StoryId>>()
      .await
  }

  pub(crate) async fn fetch_top_story_metrics(
    &self,
    limit: NonZeroUsize,
  ) -> FetchState {
    let started = Instant::now();

    let result = self.fetch_metrics(limit).await;

    match &result {
      Ok((upvotes, _)) => info!(
        stories = upvotes.len(),
        elapsed = ?started.elapsed(),
        "fetched top story metrics"
      ),
      Err(error) => warn!(
        error = ?error,
        elapsed = ?started.elapsed(),
        "could not fetch top story metrics"
      ),
    }

    FetchState::from(result)
  }

  pub(crate) fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = timeout {
      builder = builder.timeout(timeout);
    }

    Ok(Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: builder.build().context("could not build http client")?,
    })
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    serde_json::{Value, json},
    wiremock::{
      Mock, MockServer, ResponseTemplate,
      matchers::{method, path, path_regex},
    },
  };

  fn limit(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
  }

  fn client(server: &MockServer) -> Client {
    Client::new(&server.uri(), Some(Duration::from_secs(5))).unwrap()
  }

  async fn mount_ranking(server: &MockServer, ranking: Value) {
    Mock::given(method("GET"))
      .and(path("/topstories.json"))
      .respond_with(ResponseTemplate::new(200).set_body_json(ranking))
      .expect(1)
      .mount(server)
      .await;
  }

  async fn mount_item(
    server: &MockServer,
    id: u64,
    response: ResponseTemplate,
    expected_requests: u64,
  ) {
    Mock::given(method("GET"))
      .and(path(format!("/item/{id}.json")))
      .respond_with(response)
      .expect(expected_requests)
      .mount(server)
      .await;
  }

  fn item(title: &str, score: u64, descendants: u64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
      "descendants": descendants,
      "score": score,
      "title": title,
      "type": "story",
    }))
  }

  async fn scenario_server() -> MockServer {
    let server = MockServer::start().await;

    mount_ranking(&server, json!([101, 102, 103])).await;
    mount_item(&server, 101, item("A", 5, 2), 1).await;
    mount_item(&server, 102, item("B", 1, 0), 1).await;
    mount_item(&server, 103, item("C", 9, 7), 1).await;

    server
  }

  #[tokio::test]
  async fn top_stories_become_ready_series_in_rank_order() {
    let server = scenario_server().await;

    let state = client(&server).fetch_top_story_metrics(limit(3)).await;

    let FetchState::Ready { comments, upvotes } = state else {
      panic!("expected ready state, got {state:?}");
    };

    assert_eq!(upvotes.labels, ["A", "B", "C"]);
    assert_eq!(upvotes.values, [Some(5), Some(1), Some(9)]);
    assert_eq!(comments.labels, ["A", "B", "C"]);
    assert_eq!(comments.values, [Some(2), Some(0), Some(7)]);
  }

  #[tokio::test]
  async fn only_the_first_limit_stories_are_requested() {
    let server = MockServer::start().await;

    mount_ranking(&server, json!([1, 2, 3, 4, 5])).await;
    mount_item(&server, 1, item("one", 1, 1), 1).await;
    mount_item(&server, 2, item("two", 2, 2), 1).await;

    for id in 3..=5 {
      mount_item(&server, id, item("extra", 0, 0), 0).await;
    }

    let (upvotes, comments) =
      client(&server).fetch_metrics(limit(2)).await.unwrap();

    assert_eq!(upvotes.labels, ["one", "two"]);
    assert_eq!(comments.len(), 2);
  }

  #[tokio::test]
  async fn short_ranking_requests_every_story() {
    let server = MockServer::start().await;

    mount_ranking(&server, json!([7])).await;
    mount_item(&server, 7, item("only", 3, 4), 1).await;

    let (upvotes, comments) =
      client(&server).fetch_metrics(limit(10)).await.unwrap();

    assert_eq!(upvotes.values, [Some(3)]);
    assert_eq!(comments.values, [Some(4)]);
  }

  #[tokio::test]
  async fn empty_ranking_is_ready_with_empty_series() {
    let server = MockServer::start().await;

    mount_ranking(&server, json!([])).await;

    let state = client(&server).fetch_top_story_metrics(limit(10)).await;

    let FetchState::Ready { comments, upvotes } = state else {
      panic!("expected ready state, got {state:?}");
    };

    assert!(upvotes.is_empty());
    assert!(comments.is_empty());
  }

  #[tokio::test]
  async fn one_failed_detail_fails_the_whole_batch() {
    let server = MockServer::start().await;

    mount_ranking(&server, json!([1, 2, 3])).await;
    mount_item(&server, 1, item("one", 1, 1), 1).await;
    mount_item(&server, 2, ResponseTemplate::new(500), 1).await;
    mount_item(&server, 3, item("three", 3, 3), 1).await;

    let client = client(&server);

    match client.fetch_metrics(limit(3)).await {
      Err(FetchError::Detail {
        id,
        source: DetailError::Request(_),
      }) => assert_eq!(id, StoryId::from(2)),
      other => panic!("expected detail error, got {other:?}"),
    }
  }

  #[tokio::test]
  async fn failed_detail_settles_as_error_state() {
    let server = MockServer::start().await;

    mount_ranking(&server, json!([1, 2])).await;
    mount_item(&server, 1, item("one", 1, 1), 1).await;
    mount_item(
      &server,
      2,
      ResponseTemplate::new(200).set_body_string("not json"),
      1,
    )
    .await;

    let state = client(&server).fetch_top_story_metrics(limit(2)).await;

    assert!(
      matches!(state, FetchState::Error(_)),
      "expected error state, got {state:?}"
    );
  }

  #[tokio::test]
  async fn deleted_story_is_a_detail_error() {
    let server = MockServer::start().await;

    mount_ranking(&server, json!([9])).await;
    mount_item(
      &server,
      9,
      ResponseTemplate::new(200).set_body_json(Value::Null),
      1,
    )
    .await;

    assert!(matches!(
      client(&server).fetch_metrics(limit(1)).await,
      Err(FetchError::Detail {
        source: DetailError::Missing,
        ..
      })
    ));
  }

  #[tokio::test]
  async fn malformed_ranking_is_a_ranking_error() {
    let server = MockServer::start().await;

    mount_ranking(&server, json!({ "stories": [1, 2] })).await;

    assert!(matches!(
      client(&server).fetch_metrics(limit(2)).await,
      Err(FetchError::Ranking(_))
    ));
  }

  #[tokio::test]
  async fn non_integer_ids_are_a_ranking_error() {
    for ranking in [json!([1.5]), json!([-3]), json!(["../../topstories"])] {
      let server = MockServer::start().await;

      mount_ranking(&server, ranking.clone()).await;

      Mock::given(method("GET"))
        .and(path_regex(r"^/item/"))
        .respond_with(item("unexpected", 0, 0))
        .expect(0)
        .mount(&server)
        .await;

      match client(&server).fetch_metrics(limit(1)).await {
        Err(FetchError::Ranking(_)) => {}
        other => panic!("expected ranking error for {ranking}, got {other:?}"),
      }
    }
  }

  #[tokio::test]
  async fn unreachable_ranking_is_a_ranking_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/topstories.json"))
      .respond_with(ResponseTemplate::new(503))
      .expect(1)
      .mount(&server)
      .await;

    assert!(matches!(
      client(&server).fetch_metrics(limit(2)).await,
      Err(FetchError::Ranking(_))
    ));
  }

  #[tokio::test]
  async fn missing_fields_are_kept_as_missing() {
    let server = MockServer::start().await;

    mount_ranking(&server, json!([5])).await;
    mount_item(
      &server,
      5,
      ResponseTemplate::new(200).set_body_json(json!({ "id": 5 })),
      1,
    )
    .await;

    let (upvotes, comments) =
      client(&server).fetch_metrics(limit(1)).await.unwrap();

    assert_eq!(upvotes.labels, [""]);
    assert_eq!(upvotes.values, [None]);
    assert_eq!(comments.values, [None]);
  }

  #[tokio::test]
  async fn slow_detail_keeps_rank_order() {
    let server = MockServer::start().await;

    mount_ranking(&server, json!([1, 2])).await;
    mount_item(
      &server,
      1,
      item("slow", 10, 0).set_delay(Duration::from_millis(300)),
      1,
    )
    .await;
    mount_item(&server, 2, item("fast", 20, 0), 1).await;

    let (upvotes, _) = client(&server).fetch_metrics(limit(2)).await.unwrap();

    assert_eq!(upvotes.labels, ["slow", "fast"]);
    assert_eq!(upvotes.values, [Some(10), Some(20)]);
  }

  #[tokio::test]
  async fn stalled_detail_times_out() {
    let server = MockServer::start().await;

    mount_ranking(&server, json!([1])).await;
    mount_item(
      &server,
      1,
      item("stalled", 1, 1).set_delay(Duration::from_secs(5)),
      1,
    )
    .await;

    let client =
      Client::new(&server.uri(), Some(Duration::from_millis(100))).unwrap();

    match client.fetch_metrics(limit(1)).await {
      Err(FetchError::Detail {
        source: DetailError::Request(error),
        ..
      }) => assert!(error.is_timeout(), "expected timeout, got {error:?}"),
      other => panic!("expected detail timeout, got {other:?}"),
    }
  }

  #[tokio::test]
  async fn repeated_fetches_are_identical() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/topstories.json"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2])))
      .expect(2)
      .mount(&server)
      .await;

    mount_item(&server, 1, item("one", 1, 4), 2).await;
    mount_item(&server, 2, item("two", 2, 8), 2).await;

    let client = client(&server);

    let first = client.fetch_top_story_metrics(limit(2)).await;
    let second = client.fetch_top_story_metrics(limit(2)).await;

    assert!(matches!(first, FetchState::Ready { .. }));
    assert_eq!(first, second);
  }

  #[test]
  fn trailing_slash_is_trimmed_from_base_url() {
    let client = Client::new("http://localhost:1234/v0/", None).unwrap();
    assert_eq!(client.base_url, "http://localhost:1234/v0");
  }
}
