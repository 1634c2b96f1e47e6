use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
  HideHelp,
  Navigate(Route),
  NextRoute,
  None,
  PreviousRoute,
  Quit,
  ShowHelp,
}

impl Action {
  pub(crate) fn from_key(key: KeyEvent) -> Self {
    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Action::Quit,
      KeyCode::Char('?') => Action::ShowHelp,
      KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
        Action::PreviousRoute
      }
      KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::NextRoute,
      KeyCode::Char('1') => Action::Navigate(Route::Home),
      KeyCode::Char('2') => Action::Navigate(Route::Stats),
      _ => Action::None,
    }
  }
}
