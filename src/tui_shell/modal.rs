use super::*;

pub(super) struct Modal {
    pub(super) kind: ModalKind,
    pub(super) input: Input,
}

pub(super) enum ModalKind {
    TextInput {
        prompt: String,
        action: TextInputAction,
    },
    Confirm {
        message: String,
        action: PendingAction,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum TextInputAction {
    NewChannel,
    AddSublist,
    AddMediaName,
    AddMediaUrl { name: String },
    EditName,
    EditImageUrl,
    EditMediaUrl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum PendingAction {
    DeleteSelected,
}

impl Modal {
    pub(super) fn text_input(
        prompt: impl Into<String>,
        action: TextInputAction,
        initial: &str,
    ) -> Self {
        Self {
            kind: ModalKind::TextInput {
                prompt: prompt.into(),
                action,
            },
            input: Input::with_text(initial),
        }
    }

    pub(super) fn confirm(message: impl Into<String>, action: PendingAction) -> Self {
        Self {
            kind: ModalKind::Confirm {
                message: message.into(),
                action,
            },
            input: Input::default(),
        }
    }

    fn title(&self) -> &'static str {
        match &self.kind {
            ModalKind::TextInput { action, .. } => match action {
                TextInputAction::NewChannel => "New channel",
                TextInputAction::AddSublist => "Add sublist",
                TextInputAction::AddMediaName | TextInputAction::AddMediaUrl { .. } => {
                    "Add media"
                }
                TextInputAction::EditName
                | TextInputAction::EditImageUrl
                | TextInputAction::EditMediaUrl => "Edit",
            },
            ModalKind::Confirm { .. } => "Confirm",
        }
    }
}

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 72);
    let h = 5;
    let box_area = Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w.min(area.width),
        height: h.min(area.height),
    };

    frame.render_widget(ratatui::widgets::Clear, box_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal.title());
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    match &modal.kind {
        ModalKind::TextInput { prompt, .. } => {
            let line = Line::from(vec![
                Span::styled(prompt.as_str(), Style::default().fg(Color::Yellow)),
                Span::raw(modal.input.buf.as_str()),
            ]);
            let hint = Line::from(Span::styled(
                "Enter submit  Esc cancel",
                Style::default().fg(Color::DarkGray),
            ));
            frame.render_widget(Paragraph::new(vec![line, Line::from(""), hint]), inner);

            let x = (prompt.chars().count() + modal.input.cursor) as u16;
            frame.set_cursor_position((inner.x + x.min(inner.width.saturating_sub(1)), inner.y));
        }
        ModalKind::Confirm { message, .. } => {
            let lines = vec![
                Line::from(message.as_str()),
                Line::from(""),
                Line::from(Span::styled(
                    "y confirm  n cancel",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
        }
    }
}

pub(super) fn handle_modal_key<B: ChannelBackend>(app: &mut App<B>, key: KeyEvent) {
    enum ModalAction {
        None,
        Close,
        Submit {
            action: TextInputAction,
            value: String,
        },
        Confirm(PendingAction),
    }

    let action = {
        let Some(m) = app.modal.as_mut() else {
            return;
        };

        match &m.kind {
            ModalKind::TextInput { action, .. } => match key.code {
                KeyCode::Esc => ModalAction::Close,
                KeyCode::Enter => ModalAction::Submit {
                    action: action.clone(),
                    value: m.input.buf.clone(),
                },
                KeyCode::Backspace => {
                    m.input.backspace();
                    ModalAction::None
                }
                KeyCode::Delete => {
                    m.input.delete();
                    ModalAction::None
                }
                KeyCode::Left => {
                    m.input.move_left();
                    ModalAction::None
                }
                KeyCode::Right => {
                    m.input.move_right();
                    ModalAction::None
                }
                KeyCode::Home => {
                    m.input.home();
                    ModalAction::None
                }
                KeyCode::End => {
                    m.input.end();
                    ModalAction::None
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    m.input.insert_char(c);
                    ModalAction::None
                }
                _ => ModalAction::None,
            },
            ModalKind::Confirm { action, .. } => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => ModalAction::Confirm(*action),
                KeyCode::Char('n') | KeyCode::Esc => ModalAction::Close,
                _ => ModalAction::None,
            },
        }
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Submit { action, value } => {
            app.modal = None;
            app.submit_text(action, value);
        }
        ModalAction::Confirm(action) => {
            app.modal = None;
            app.confirm(action);
        }
    }
}
