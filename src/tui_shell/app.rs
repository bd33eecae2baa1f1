use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Focus {
    Channels,
    Tree,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum StatusKind {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub(super) struct Status {
    pub(super) at: OffsetDateTime,
    pub(super) kind: StatusKind,
    pub(super) text: String,
}

pub(super) struct App<B: ChannelBackend> {
    pub(super) sync: SyncController<B>,
    pub(super) store: Option<LocalStore>,
    pub(super) registry: ChannelListRegistry,
    pub(super) channel_cursor: usize,
    pub(super) focus: Focus,
    pub(super) modal: Option<Modal>,
    pub(super) status: Option<Status>,
    pub(super) quit: bool,
}

impl<B: ChannelBackend> App<B> {
    pub(super) fn new(sync: SyncController<B>, store: Option<LocalStore>) -> Self {
        Self {
            sync,
            store,
            registry: ChannelListRegistry::new(),
            channel_cursor: 0,
            focus: Focus::Channels,
            modal: None,
            status: None,
            quit: false,
        }
    }

    /// Loads the channel list and opens the last edited channel (falling
    /// back to the active one).
    pub(super) fn bootstrap(&mut self) {
        if let Err(err) = self.registry.refresh(&self.sync) {
            self.push_error(format!("load channels: {}", err));
            return;
        }

        let last = self
            .store
            .as_ref()
            .and_then(|s| s.last_channel().ok().flatten())
            .filter(|name| self.registry.contains(name));
        let initial = last.or_else(|| self.registry.active().map(str::to_string));

        match initial {
            Some(name) => {
                self.channel_cursor = self
                    .registry
                    .list()
                    .iter()
                    .position(|n| *n == name)
                    .unwrap_or(0);
                self.open_channel(&name);
            }
            None => self.push_info(format!("{} channels", self.registry.list().len())),
        }
    }

    pub(super) fn push_info(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Info, text.into());
    }

    pub(super) fn push_error(&mut self, text: impl Into<String>) {
        let text = text.into();
        warn!(message = %text, "tui error");
        self.set_status(StatusKind::Error, text);
    }

    fn set_status(&mut self, kind: StatusKind, text: String) {
        self.status = Some(Status {
            at: OffsetDateTime::now_utc(),
            kind,
            text,
        });
    }

    pub(super) fn open(&self) -> Option<&OpenChannel> {
        self.registry.open_channel()
    }

    pub(super) fn cursor_channel(&self) -> Option<&str> {
        self.registry
            .list()
            .get(self.channel_cursor)
            .map(String::as_str)
    }

    pub(super) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Channels => Focus::Tree,
            Focus::Tree => Focus::Channels,
        };
    }

    pub(super) fn move_down(&mut self) {
        match self.focus {
            Focus::Channels => {
                let len = self.registry.list().len();
                if self.channel_cursor + 1 < len {
                    self.channel_cursor += 1;
                }
            }
            Focus::Tree => {
                if let Some(open) = self.registry.open_channel_mut() {
                    open.selection.move_down(&open.tree);
                }
            }
        }
    }

    pub(super) fn move_up(&mut self) {
        match self.focus {
            Focus::Channels => self.channel_cursor = self.channel_cursor.saturating_sub(1),
            Focus::Tree => {
                if let Some(open) = self.registry.open_channel_mut() {
                    open.selection.move_up(&open.tree);
                }
            }
        }
    }

    pub(super) fn activate(&mut self) {
        match self.focus {
            Focus::Channels => {
                if let Some(name) = self.cursor_channel().map(str::to_string) {
                    self.open_channel(&name);
                }
            }
            Focus::Tree => self.toggle_selected(),
        }
    }

    pub(super) fn open_channel(&mut self, name: &str) {
        match self.registry.open(&self.sync, name) {
            Ok(open) => {
                let count = open.tree.len() - 1;
                info!(channel = name, nodes = count, "channel opened");
                self.focus = Focus::Tree;
                self.push_info(format!("opened {} ({} nodes)", name, count));
                if let Some(store) = &self.store
                    && let Err(err) = store.set_last_channel(Some(name))
                {
                    warn!(error = %err, "remember last channel");
                }
            }
            Err(err) => self.push_error(format!("open {}: {}", name, err)),
        }
    }

    fn toggle_selected(&mut self) {
        let Some(open) = self.registry.open_channel_mut() else {
            return;
        };
        let Some(path) = open.selection.selected().cloned() else {
            return;
        };
        if open.tree.kind_at(&path) != Some(NodeKind::Sublist) || path.is_root() {
            return;
        }
        if let Err(err) = open.tree.toggle_expanded(&path) {
            self.push_error(err.to_string());
        }
    }

    pub(super) fn refresh(&mut self) {
        if let Err(err) = self.registry.refresh(&self.sync) {
            self.push_error(format!("refresh: {}", err));
            return;
        }
        let len = self.registry.list().len();
        self.channel_cursor = self.channel_cursor.min(len.saturating_sub(1));

        let Some(open) = self.registry.open_channel() else {
            self.push_info(format!("{} channels", len));
            return;
        };
        let name = open.name().to_string();
        let selected = open.selection.selected().cloned();

        self.open_channel(&name);
        if let (Some(path), Some(open)) = (selected, self.registry.open_channel_mut()) {
            // The reloaded tree may be shorter; fall back to the root.
            let _ = open.selection.select(&open.tree, path);
        }
    }

    pub(super) fn set_active(&mut self) {
        let name = match self.focus {
            Focus::Channels => self.cursor_channel().map(str::to_string),
            Focus::Tree => self.open().map(|o| o.name().to_string()),
        };
        let Some(name) = name else {
            self.push_error("no channel to activate");
            return;
        };
        match self.registry.set_active(&self.sync, &name) {
            Ok(()) => self.push_info(format!("{} is now active", name)),
            Err(err) => self.push_error(format!("activate {}: {}", name, err)),
        }
    }

    pub(super) fn prompt_new_channel(&mut self) {
        self.modal = Some(Modal::text_input("Name: ", TextInputAction::NewChannel, ""));
    }

    pub(super) fn prompt_add(&mut self, action: TextInputAction) {
        let Some(open) = self.open() else {
            self.push_error("open a channel first");
            return;
        };
        if !open.selection.can_add_children(&open.tree) {
            let err = match open.selection.selected() {
                Some(path) => TreeError::InvalidParentKind { path: path.clone() },
                None => TreeError::NoSelection,
            };
            self.push_error(err.to_string());
            return;
        }
        self.modal = Some(Modal::text_input("Name: ", action, ""));
    }

    pub(super) fn prompt_edit(&mut self, action: TextInputAction) {
        let Some(open) = self.open() else {
            self.push_error("open a channel first");
            return;
        };
        let Some(node) = open.selection.resolve(&open.tree) else {
            self.push_error(TreeError::NoSelection.to_string());
            return;
        };

        let (prompt, initial) = match (&action, node) {
            (TextInputAction::EditName, _) => ("Name: ", node.name()),
            (TextInputAction::EditImageUrl, _) => ("Image URL: ", node.image_url()),
            (TextInputAction::EditMediaUrl, NodeRef::Media(m)) => {
                ("Media URL: ", m.media_url.as_str())
            }
            (TextInputAction::EditMediaUrl, NodeRef::Sublist(_)) => {
                self.push_error(
                    TreeError::UnknownFieldForKind {
                        field: "mediaUrl",
                        kind: NodeKind::Sublist,
                    }
                    .to_string(),
                );
                return;
            }
            _ => return,
        };
        let initial = initial.to_string();
        self.modal = Some(Modal::text_input(prompt, action, &initial));
    }

    pub(super) fn prompt_delete(&mut self) {
        let Some(open) = self.open() else {
            self.push_error("open a channel first");
            return;
        };
        match open.selection.resolve(&open.tree) {
            Some(node) if !open.selection.selected().is_some_and(|p| p.is_root()) => {
                let message = match node {
                    NodeRef::Sublist(s) => format!(
                        "Delete sublist '{}' and its {} entries?",
                        s.name,
                        s.children.len()
                    ),
                    NodeRef::Media(m) => format!("Delete '{}'?", m.name),
                };
                self.modal = Some(Modal::confirm(message, PendingAction::DeleteSelected));
            }
            Some(_) => self.push_error("the root sublist cannot be deleted"),
            None => self.push_error(TreeError::NoSelection.to_string()),
        }
    }

    pub(super) fn toggle_media_type(&mut self) {
        self.edit_open("media type", |open| {
            let next = match open.selection.resolve(&open.tree) {
                Some(NodeRef::Media(m)) => m.media_type.next(),
                Some(NodeRef::Sublist(_)) => {
                    return Err(TreeError::UnknownFieldForKind {
                        field: "mediaType",
                        kind: NodeKind::Sublist,
                    });
                }
                None => return Err(TreeError::NoSelection),
            };
            open.selection
                .modify(&mut open.tree, [FieldUpdate::MediaType(next)])?;
            Ok(format!("media type set to {}", next))
        });
    }

    pub(super) fn toggle_loop(&mut self) {
        self.edit_open("loop", |open| {
            let next = match open.selection.resolve(&open.tree) {
                Some(NodeRef::Media(m)) => !m.looping,
                Some(NodeRef::Sublist(_)) => {
                    return Err(TreeError::UnknownFieldForKind {
                        field: "loop",
                        kind: NodeKind::Sublist,
                    });
                }
                None => return Err(TreeError::NoSelection),
            };
            open.selection
                .modify(&mut open.tree, [FieldUpdate::Loop(next)])?;
            Ok(format!("loop {}", if next { "on" } else { "off" }))
        });
    }

    pub(super) fn submit_text(&mut self, action: TextInputAction, value: String) {
        match action {
            TextInputAction::NewChannel => self.create_channel(value.trim()),
            TextInputAction::AddSublist => {
                self.edit_open("add sublist", |open| {
                    let parent = open.selection.selected().cloned();
                    let path = open.selection.add_sublist(&mut open.tree, value.trim(), "")?;
                    reveal(open, parent, path.clone())?;
                    Ok(format!("added sublist at {}", path))
                });
            }
            TextInputAction::AddMediaName => {
                self.modal = Some(Modal::text_input(
                    "Media URL: ",
                    TextInputAction::AddMediaUrl {
                        name: value.trim().to_string(),
                    },
                    "",
                ));
            }
            TextInputAction::AddMediaUrl { name } => {
                self.edit_open("add media", |open| {
                    let parent = open.selection.selected().cloned();
                    let path = open.selection.add_media(
                        &mut open.tree,
                        name,
                        "",
                        value.trim(),
                        MediaType::default(),
                    )?;
                    reveal(open, parent, path.clone())?;
                    Ok(format!("added media at {}", path))
                });
            }
            TextInputAction::EditName => self.modify_selected(FieldUpdate::Name(value)),
            TextInputAction::EditImageUrl => self.modify_selected(FieldUpdate::ImageUrl(value)),
            TextInputAction::EditMediaUrl => self.modify_selected(FieldUpdate::MediaUrl(value)),
        }
    }

    pub(super) fn confirm(&mut self, action: PendingAction) {
        match action {
            PendingAction::DeleteSelected => self.edit_open("delete", |open| {
                let removed = open.selection.delete_selected(&mut open.tree)?;
                Ok(format!("deleted '{}'", removed.name()))
            }),
        }
    }

    fn create_channel(&mut self, name: &str) {
        match self.registry.create(&self.sync, name) {
            Ok(()) => {
                self.channel_cursor = self.registry.list().len().saturating_sub(1);
                self.push_info(format!("created {}", name));
            }
            Err(err) => self.push_error(format!("create {}: {}", name, err)),
        }
    }

    fn modify_selected(&mut self, update: FieldUpdate) {
        let label = update.field();
        self.edit_open(label, |open| {
            open.selection.modify(&mut open.tree, [update])?;
            Ok(format!("{} updated", label))
        });
    }

    /// Applies `edit` to the open channel and saves the whole document. A
    /// failed save keeps the edited tree; the next successful save carries
    /// it.
    fn edit_open<F>(&mut self, label: &str, edit: F)
    where
        F: FnOnce(&mut OpenChannel) -> Result<String, TreeError>,
    {
        let Some(open) = self.registry.open_channel_mut() else {
            self.push_error("open a channel first");
            return;
        };

        let result = edit(&mut *open).map_err(ChannelError::from).and_then(|msg| {
            open.save(&self.sync)
                .map(|()| msg)
                .map_err(ChannelError::from)
        });

        match result {
            Ok(msg) => self.push_info(format!("{}; saved", msg)),
            Err(ChannelError::Tree(err)) => self.push_error(format!("{}: {}", label, err)),
            Err(ChannelError::Sync(err)) => {
                self.push_error(format!("{}: save failed, local edit kept: {}", label, err))
            }
        }
    }
}

/// Expands the parent of a freshly added node and selects the node.
fn reveal(
    open: &mut OpenChannel,
    parent: Option<NodePath>,
    path: NodePath,
) -> Result<(), TreeError> {
    if let Some(parent) = parent {
        open.tree.set_expanded(&parent, true)?;
    }
    open.selection.select(&open.tree, path)
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
