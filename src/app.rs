use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn draw(&self, frame: &mut Frame) {
    let [nav, body, footer] = Self::layout(frame.area());

    let route = self.state.route();

    NavBar::draw(frame, nav, route);

    match route {
      Route::Home => HomeView::draw(frame, body, self.state.limit()),
      Route::Stats => self.state.stats().draw(frame, body),
    }

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, footer);

    self.state.help().draw(frame);
  }

  fn execute_effect(&self, effect: Effect) {
    match effect {
      Effect::FetchMetrics {
        limit,
        registration,
        request_id,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let fetch = Abortable::new(
            client.fetch_top_story_metrics(limit),
            registration,
          );

          match fetch.await {
            Ok(state) => {
              Self::send_event(&sender, Event::Metrics { request_id, state });
            }
            Err(_) => debug!(request_id, "metrics fetch cancelled"),
          }
        });
      }
    }
  }

  fn execute_effects(&self, effects: Vec<Effect>) {
    for effect in effects {
      self.execute_effect(effect);
    }
  }

  /// Splits the screen into the navigation bar, the page body and the
  /// status line.
  pub(crate) fn layout(area: Rect) -> [Rect; 3] {
    Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .areas(area)
  }

  pub(crate) fn new(client: Client, limit: NonZeroUsize, route: Route) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let (state, dispatch) = State::new(limit, route);

    let app = Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    };

    app.execute_effects(dispatch.effects);

    app
  }

  fn process_pending_events(&mut self) {
    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(120))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let dispatch = self.state.dispatch_action(self.state.handle_key(key));

      self.execute_effects(dispatch.effects);

      if dispatch.should_exit {
        break;
      }
    }

    Ok(())
  }

  /// Hands an event back to the UI loop. Returns false when the loop has
  /// already shut down and the event is dropped.
  fn send_event(sender: &UnboundedSender<Event>, event: Event) -> bool {
    match sender.send(event) {
      Ok(()) => true,
      Err(mpsc::error::SendError(Event::Metrics { request_id, .. })) => {
        debug!(request_id, "event loop closed, dropping metrics");
        false
      }
    }
  }
}
