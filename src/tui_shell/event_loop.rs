use super::*;

pub(super) fn run_loop<B: ChannelBackend>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<B>,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

pub(super) fn handle_key<B: ChannelBackend>(app: &mut App<B>, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.quit = true;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Enter => app.activate(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('n') => app.prompt_new_channel(),
        KeyCode::Char('a') => app.set_active(),
        KeyCode::Char('s') => app.prompt_add(TextInputAction::AddSublist),
        KeyCode::Char('m') => app.prompt_add(TextInputAction::AddMediaName),
        KeyCode::Char('e') => app.prompt_edit(TextInputAction::EditName),
        KeyCode::Char('i') => app.prompt_edit(TextInputAction::EditImageUrl),
        KeyCode::Char('u') => app.prompt_edit(TextInputAction::EditMediaUrl),
        KeyCode::Char('t') => app.toggle_media_type(),
        KeyCode::Char('l') => app.toggle_loop(),
        KeyCode::Char('d') => app.prompt_delete(),
        _ => {}
    }
}
