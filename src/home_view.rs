use super::*;

pub(crate) struct HomeView;

impl HomeView {
  pub(crate) fn draw(frame: &mut Frame, area: Rect, limit: NonZeroUsize) {
    let text = vec![
      Line::from(Span::styled(
        format!("Welcome to {APP_TITLE}"),
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )),
      Line::from(""),
      Line::from(Span::styled(
        format!(
          "Open Stats (2 or →) to chart upvotes and comments for the top {limit} stories."
        ),
        Style::default().fg(Color::DarkGray),
      )),
    ];

    let paragraph = Paragraph::new(text)
      .alignment(Alignment::Center)
      .wrap(Wrap { trim: true })
      .block(Block::default().padding(Padding::top(1)));

    frame.render_widget(paragraph, area);
  }
}
