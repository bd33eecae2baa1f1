use super::*;

const KEY_HINTS: &str =
    "Tab pane  Enter open/expand  s sublist  m media  e name  i image  u url  t type  l loop  d delete  n new  a activate  r refresh  q quit";

pub(super) fn draw<B: ChannelBackend>(frame: &mut ratatui::Frame, app: &App<B>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(frame, chunks[0], app);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);
    draw_channels(frame, panes[0], app);
    draw_tree(frame, panes[1], app);

    draw_status(frame, chunks[2], app);

    if let Some(m) = &app.modal {
        modal::draw_modal(frame, m);
    }
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn draw_header<B: ChannelBackend>(frame: &mut ratatui::Frame, area: Rect, app: &App<B>) {
    let active = app
        .registry
        .active()
        .map(|a| format!("active: {}", a))
        .unwrap_or_else(|| "no active channel".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "chanbuild",
                Style::default().fg(Color::Black).bg(Color::White),
            ),
            Span::raw("  "),
            Span::styled(active, Style::default().fg(Color::Green)),
        ]),
        Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_channels<B: ChannelBackend>(frame: &mut ratatui::Frame, area: Rect, app: &App<B>) {
    let open = app.open().map(|o| o.name());
    let items: Vec<ListItem> = app
        .registry
        .list()
        .iter()
        .map(|name| {
            let marker = if app.registry.active() == Some(name.as_str()) {
                "* "
            } else {
                "  "
            };
            let style = if open == Some(name.as_str()) {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(name.as_str(), style),
            ]))
        })
        .collect();

    let focused = app.focus == Focus::Channels;
    let list = List::new(items)
        .block(pane_block("Channels".to_string(), focused))
        .highlight_style(highlight(focused));

    let mut state = ListState::default();
    if !app.registry.list().is_empty() {
        state.select(Some(app.channel_cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_tree<B: ChannelBackend>(frame: &mut ratatui::Frame, area: Rect, app: &App<B>) {
    let focused = app.focus == Focus::Tree;
    let Some(open) = app.open() else {
        let hint = Paragraph::new("Select a channel and press Enter")
            .block(pane_block("Channel".to_string(), focused));
        frame.render_widget(hint, area);
        return;
    };

    let selected = open.selection.selected();
    let mut state = ListState::default();
    let mut items = Vec::new();
    for (i, entry) in open.tree.visible_rows().enumerate() {
        if selected == Some(&entry.path) {
            state.select(Some(i));
        }
        items.push(ListItem::new(row_line(entry.depth, entry.node, entry.path.is_root())));
    }

    let title = format!("{} ({} nodes)", open.name(), open.tree.len() - 1);
    let list = List::new(items)
        .block(pane_block(title, focused))
        .highlight_style(highlight(focused));
    frame.render_stateful_widget(list, area, &mut state);
}

fn row_line(depth: usize, node: NodeRef<'_>, is_root: bool) -> Line<'_> {
    let indent = "  ".repeat(depth);
    match node {
        NodeRef::Sublist(s) => {
            let marker = if is_root || s.expanded { "▾ " } else { "▸ " };
            Line::from(vec![
                Span::raw(indent),
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::raw(s.name.as_str()),
                Span::styled(
                    format!("  {}", s.children.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        NodeRef::Media(m) => {
            let mut tags = m.media_type.to_string();
            if m.looping {
                tags.push_str(" loop");
            }
            Line::from(vec![
                Span::raw(indent),
                Span::styled("• ", Style::default().fg(Color::Magenta)),
                Span::raw(m.name.as_str()),
                Span::styled(format!("  [{}]", tags), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("  {}", m.media_url),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
    }
}

fn highlight(focused: bool) -> Style {
    if focused {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

fn draw_status<B: ChannelBackend>(frame: &mut ratatui::Frame, area: Rect, app: &App<B>) {
    let line = match &app.status {
        Some(status) => {
            let style = match status.kind {
                StatusKind::Info => Style::default().fg(Color::White),
                StatusKind::Error => Style::default().fg(Color::Red),
            };
            Line::from(vec![
                Span::styled(
                    format!(
                        "{:02}:{:02}:{:02} ",
                        status.at.hour(),
                        status.at.minute(),
                        status.at.second()
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(status.text.as_str(), style),
            ])
        }
        None => Line::from(""),
    };
    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Last")),
        area,
    );
}
