#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Route {
  Home,
  Stats,
}

impl Route {
  pub(crate) fn all() -> &'static [Route] {
    &[Route::Home, Route::Stats]
  }

  /// Resolves a path to its route. Unknown paths fall back to home.
  pub(crate) fn from_path(path: &str) -> Self {
    match path.trim().trim_end_matches('/') {
      "/stats" | "stats" => Route::Stats,
      _ => Route::Home,
    }
  }

  pub(crate) fn index(self) -> usize {
    Self::all()
      .iter()
      .position(|route| *route == self)
      .unwrap_or(0)
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Route::Home => "Home",
      Route::Stats => "Stats",
    }
  }

  pub(crate) fn next(self) -> Self {
    let routes = Self::all();
    routes[(self.index() + 1) % routes.len()]
  }

  pub(crate) fn path(self) -> &'static str {
    match self {
      Route::Home => "/",
      Route::Stats => "/stats",
    }
  }

  pub(crate) fn previous(self) -> Self {
    let routes = Self::all();
    routes[(self.index() + routes.len() - 1) % routes.len()]
  }
}
