use {
  action::Action,
  anyhow::{Context, anyhow},
  app::App,
  arguments::Arguments,
  clap::Parser,
  client::Client,
  crossterm::{
    event as crossterm_event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind},
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  dispatch::Dispatch,
  effect::Effect,
  error::{DetailError, FetchError},
  event::Event,
  fetch_state::FetchState,
  futures::future::{AbortHandle, AbortRegistration, Abortable, join_all},
  help_view::HelpView,
  home_view::HomeView,
  metrics::MetricsSeries,
  nav_bar::NavBar,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Bar, BarChart, BarGroup, Block, Borders, Clear, Padding, Paragraph, Tabs,
      Wrap,
    },
  },
  route::Route,
  serde::Deserialize,
  state::State,
  stats_view::StatsView,
  std::{
    backtrace::BacktraceStatus,
    env,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, IsTerminal, Stdout},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  story_detail::StoryDetail,
  story_id::StoryId,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, warn},
  utils::truncate,
};

mod action;
mod app;
mod arguments;
mod client;
mod dispatch;
mod effect;
mod error;
mod event;
mod fetch_state;
mod help_view;
mod home_view;
mod logging;
mod metrics;
mod nav_bar;
mod route;
mod state;
mod stats_view;
mod story_detail;
mod story_id;
mod utils;

const APP_TITLE: &str = "Hacker News Stats";

const STATUS: &str =
  "←/h previous • →/l next • 1 home • 2 stats • q/esc quit • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ← / h   previous page
  → / l   next page
  1       home
  2       stats for the current top stories

Stats:
  Opening the stats page fetches the top stories once.
  Leave and come back to fetch them again.

General:
  q       quit hn-stats
  esc     close help or quit
  ?       toggle this help
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  let _guard = logging::initialize(&arguments.log_dir()?)
    .context("could not initialize logging")?;

  info!(?arguments, "starting hn-stats");

  let client =
    Client::new(&arguments.api_base_url, arguments.request_timeout())?;

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, arguments.limit, arguments.initial_route());

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  info!("exiting hn-stats");

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
