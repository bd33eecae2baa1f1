use chanbuild::model::{ChannelTree, NodeRef};
use chanbuild::registry::ChannelListRegistry;
use chanbuild::{wire, xml};

use super::*;

type Controller = SyncController<RemoteClient>;

pub(super) fn handle_lists_command(sync: &Controller, json: bool) -> Result<()> {
    let mut registry = ChannelListRegistry::new();
    registry.refresh(sync)?;

    if json {
        let out = serde_json::json!({
            "channels": registry.list(),
            "active": registry.active(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serialize channel list json")?
        );
        return Ok(());
    }

    if registry.list().is_empty() {
        println!("No channels");
    }
    for name in registry.list() {
        let marker = if registry.active() == Some(name.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{} {}", marker, name);
    }
    Ok(())
}

pub(super) fn handle_create_command(sync: &Controller, name: &str) -> Result<()> {
    let mut registry = ChannelListRegistry::new();
    registry.create(sync, name)?;
    println!("Created {}", name);
    Ok(())
}

pub(super) fn handle_activate_command(sync: &Controller, name: &str) -> Result<()> {
    let mut registry = ChannelListRegistry::new();
    registry.set_active(sync, name)?;
    println!("Active channel: {}", name);
    Ok(())
}

pub(super) fn handle_show_command(
    sync: &Controller,
    name: Option<&str>,
    json: bool,
) -> Result<()> {
    let tree = match name {
        Some(name) => sync.fetch(name)?,
        None => sync
            .fetch_active()?
            .context("no active channel (run `chanbuild activate <name>`)")?,
    };
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&wire::to_wire_document(&tree))
                .context("serialize channel json")?
        );
    } else {
        print_tree(&tree);
    }
    Ok(())
}

pub(super) fn handle_xml_command(sync: &Controller, name: &str) -> Result<()> {
    let tree = sync.fetch(name)?;
    println!("{}", xml::render_tree(&tree));
    Ok(())
}

fn print_tree(tree: &ChannelTree) {
    let width = tree
        .walk()
        .map(|e| e.path.to_string().len())
        .max()
        .unwrap_or(1);

    for entry in tree.walk() {
        let indent = "  ".repeat(entry.depth);
        let label = match entry.node {
            NodeRef::Sublist(s) => format!("{} ({} entries)", s.name, s.children.len()),
            NodeRef::Media(m) => {
                let looping = if m.looping { " loop" } else { "" };
                format!("{} [{}{}] {}", m.name, m.media_type, looping, m.media_url)
            }
        };
        println!(
            "{:<width$}  {}{}",
            entry.path.to_string(),
            indent,
            label,
            width = width
        );
    }
}
