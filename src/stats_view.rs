use super::*;

const COMMENTS_COLOR: Color = Color::Rgb(153, 102, 255);
const UPVOTES_COLOR: Color = Color::Rgb(75, 192, 192);

const COMMENTS_TITLE: &str = "Comments per Story";
const UPVOTES_TITLE: &str = "Upvotes per Story";

const ERROR_TEXT: &str = "Error fetching data";
const LOADING_TEXT: &str = "Loading stories...";
const EMPTY_TEXT: &str = "No stories to chart.";

const LABEL_WIDTH: usize = 40;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const SPINNER_INTERVAL_MS: u128 = 120;

/// One mount of the stats page: a single fetch and the state it settles into.
struct FetchCycle {
  abort_handle: AbortHandle,
  request_id: u64,
  started_at: Instant,
  state: FetchState,
}

pub(crate) struct StatsView {
  cycle: Option<FetchCycle>,
  next_request_id: u64,
}

impl StatsView {
  pub(crate) fn draw(&self, frame: &mut Frame, area: Rect) {
    let Some(cycle) = &self.cycle else {
      return;
    };

    match &cycle.state {
      FetchState::Loading => {
        let tick = cycle.started_at.elapsed().as_millis() / SPINNER_INTERVAL_MS;
        let glyph = SPINNER[usize::try_from(tick).unwrap_or(0) % SPINNER.len()];

        let loading = Paragraph::new(Line::from(vec![
          Span::styled(glyph, Style::default().fg(Color::Cyan)),
          Span::raw(" "),
          Span::styled(LOADING_TEXT, Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::top(area.height / 2)));

        frame.render_widget(loading, area);
      }
      FetchState::Error(_) => {
        let error = Paragraph::new(Span::styled(
          ERROR_TEXT,
          Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::top(area.height / 2)));

        frame.render_widget(error, area);
      }
      FetchState::Ready { comments, upvotes } => {
        let layout = Layout::default()
          .direction(Direction::Vertical)
          .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
          .split(area);

        Self::draw_chart(frame, layout[0], upvotes, UPVOTES_TITLE, UPVOTES_COLOR);

        Self::draw_chart(
          frame,
          layout[1],
          comments,
          COMMENTS_TITLE,
          COMMENTS_COLOR,
        );
      }
    }
  }

  fn draw_chart(
    frame: &mut Frame,
    area: Rect,
    series: &MetricsSeries,
    title: &'static str,
    color: Color,
  ) {
    let legend = Line::from(vec![
      Span::styled("■ ", Style::default().fg(color)),
      Span::raw(series.label),
    ])
    .right_aligned();

    let mut block = Block::default()
      .title(Span::styled(
        title,
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      ))
      .title_top(legend)
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray));

    if series.is_empty() {
      let empty = Paragraph::new(Span::styled(
        EMPTY_TEXT,
        Style::default().fg(Color::DarkGray),
      ))
      .block(block);

      frame.render_widget(empty, area);

      return;
    }

    let shown = series.len().min(usize::from(block.inner(area).height));

    if shown < series.len() {
      block = block.title_bottom(
        Line::from(format!("showing {shown} of {} stories", series.len()))
          .style(Style::default().fg(Color::Yellow))
          .right_aligned(),
      );
    }

    let bars = series
      .points()
      .take(shown)
      .map(|(label, value)| {
        Bar::default()
          .label(Line::from(truncate(label, LABEL_WIDTH)))
          .value(value.unwrap_or(0))
          .text_value(
            value.map_or_else(|| "n/a".to_string(), |value| value.to_string()),
          )
          .style(Style::default().fg(color))
          .value_style(Style::default().fg(Color::Black).bg(color))
      })
      .collect::<Vec<_>>();

    let chart = BarChart::default()
      .block(block)
      .direction(Direction::Horizontal)
      .bar_width(1)
      .bar_gap(0)
      .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
  }

  pub(crate) fn is_mounted(&self) -> bool {
    self.cycle.is_some()
  }

  /// Starts a fresh fetch cycle, cancelling any previous one. The returned
  /// effect carries the registration half of the cycle's abort handle.
  pub(crate) fn mount(&mut self, limit: NonZeroUsize) -> Effect {
    self.unmount();

    let (abort_handle, registration) = AbortHandle::new_pair();

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.cycle = Some(FetchCycle {
      abort_handle,
      request_id,
      started_at: Instant::now(),
      state: FetchState::Loading,
    });

    info!(request_id, limit = limit.get(), "mounted stats view");

    Effect::FetchMetrics {
      limit,
      registration,
      request_id,
    }
  }

  pub(crate) fn new() -> Self {
    Self {
      cycle: None,
      next_request_id: 0,
    }
  }

  /// Applies the outcome of a fetch. Outcomes for another cycle, or for a
  /// cycle that already settled, are dropped.
  pub(crate) fn settle(&mut self, request_id: u64, state: FetchState) -> bool {
    let Some(cycle) = self.cycle.as_mut() else {
      return false;
    };

    if cycle.request_id != request_id {
      return false;
    }

    cycle.state.settle(state)
  }

  pub(crate) fn state(&self) -> Option<&FetchState> {
    self.cycle.as_ref().map(|cycle| &cycle.state)
  }

  pub(crate) fn unmount(&mut self) {
    if let Some(cycle) = self.cycle.take() {
      cycle.abort_handle.abort();

      debug!(
        request_id = cycle.request_id,
        settled = !cycle.state.is_loading(),
        "unmounted stats view"
      );
    }
  }
}
