use super::*;

pub(crate) struct State {
  help: HelpView,
  limit: NonZeroUsize,
  message: String,
  pending_effects: Vec<Effect>,
  route: Route,
  stats: StatsView,
}

impl State {
  pub(crate) fn dispatch_action(&mut self, action: Action) -> Dispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "action dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match action {
      Action::HideHelp => self.help.hide(&mut self.message),
      Action::Navigate(route) => self.navigate(route),
      Action::NextRoute => self.navigate(self.route.next()),
      Action::None => {}
      Action::PreviousRoute => self.navigate(self.route.previous()),
      Action::Quit => {
        should_exit = true;
      }
      Action::ShowHelp => self.help.show(&mut self.message),
    }

    Dispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Metrics { request_id, state } => {
        if self.stats.settle(request_id, state) {
          info!(
            request_id,
            ready = matches!(self.stats.state(), Some(FetchState::Ready { .. })),
            "stats view settled"
          );
        } else {
          debug!(request_id, "ignoring metrics for a stale fetch");
        }
      }
    }
  }

  pub(crate) fn handle_key(&self, key: KeyEvent) -> Action {
    if self.help.is_visible() {
      HelpView::handle_key(key)
    } else {
      Action::from_key(key)
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn limit(&self) -> NonZeroUsize {
    self.limit
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  /// Leaving the stats page unmounts it, entering it mounts a fresh fetch.
  fn navigate(&mut self, route: Route) {
    if route == self.route {
      return;
    }

    debug!(from = self.route.path(), to = route.path(), "navigating");

    if self.stats.is_mounted() {
      self.stats.unmount();
    }

    self.route = route;

    if route == Route::Stats {
      let effect = self.stats.mount(self.limit);
      self.pending_effects.push(effect);
    }
  }

  /// Creates the state on the home page, then navigates to `route`. The
  /// returned dispatch holds the effects of entering it.
  pub(crate) fn new(limit: NonZeroUsize, route: Route) -> (Self, Dispatch) {
    let mut state = Self {
      help: HelpView::new(),
      limit,
      message: STATUS.into(),
      pending_effects: Vec::new(),
      route: Route::Home,
      stats: StatsView::new(),
    };

    let dispatch = state.dispatch_action(Action::Navigate(route));

    (state, dispatch)
  }

  pub(crate) fn route(&self) -> Route {
    self.route
  }

  pub(crate) fn stats(&self) -> &StatsView {
    &self.stats
  }
}
