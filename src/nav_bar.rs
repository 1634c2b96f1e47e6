use super::*;

pub(crate) struct NavBar;

impl NavBar {
  pub(crate) fn draw(frame: &mut Frame, area: Rect, active: Route) {
    let block = Block::default()
      .borders(Borders::BOTTOM)
      .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);

    frame.render_widget(block, area);

    let titles: Vec<Line> = Route::all()
      .iter()
      .map(|route| Line::from(route.label()))
      .collect();

    let links_width = Route::all()
      .iter()
      .map(|route| route.label().chars().count() + 3)
      .sum::<usize>();

    let layout = Layout::default()
      .direction(Direction::Horizontal)
      .constraints([
        Constraint::Min(0),
        Constraint::Length(u16::try_from(links_width).unwrap_or(u16::MAX)),
      ])
      .split(inner);

    let title = Paragraph::new(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        APP_TITLE,
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      ),
    ]));

    frame.render_widget(title, layout[0]);

    let links = Tabs::new(titles)
      .select(active.index())
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(links, layout[1]);
  }
}
