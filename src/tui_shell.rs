use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::model::{FieldUpdate, MediaType, NodeKind, NodePath, NodeRef};
use crate::registry::{ChannelListRegistry, OpenChannel};
use crate::remote::RemoteClient;
use crate::store::{self, LocalStore};
use crate::sync::{ChannelBackend, SyncController};
use crate::{ChannelError, TreeError};

mod app;
use app::{App, Focus, StatusKind};

mod event_loop;

mod input;
use input::Input;

mod modal;
use modal::{Modal, PendingAction, TextInputAction};

mod render;

pub(crate) fn run() -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    // Resolve credentials before touching the terminal so failures print
    // normally.
    let cwd = std::env::current_dir().context("get current dir")?;
    let (remote, session) = store::resolve_credentials(&cwd)?;
    let local = LocalStore::discover(&cwd).ok();
    let sync = SyncController::new(RemoteClient::new(remote, session)?);

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(sync, local);
    app.bootstrap();
    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}
