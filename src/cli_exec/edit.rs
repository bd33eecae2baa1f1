use chanbuild::model::{ChannelTree, FieldUpdate};

use crate::cli_commands::edit::{AddMediaArgs, AddSublistArgs, DeleteArgs, ModifyArgs};

use super::*;

type Controller = SyncController<RemoteClient>;

/// Fetches `channel`, applies `edit` and saves the whole document back.
fn edit_channel<T, F>(sync: &Controller, channel: &str, edit: F) -> Result<T>
where
    F: FnOnce(&mut ChannelTree) -> Result<T>,
{
    let mut tree = sync.fetch(channel)?;
    let out = edit(&mut tree)?;
    sync.save(&tree)
        .with_context(|| format!("save channel '{}'", channel))?;
    Ok(out)
}

pub(super) fn handle_add_sublist_command(sync: &Controller, args: AddSublistArgs) -> Result<()> {
    let path = edit_channel(sync, &args.channel, |tree| {
        Ok(tree.add_sublist(&args.parent, args.name, args.image_url)?)
    })?;
    println!("Added {}", path);
    Ok(())
}

pub(super) fn handle_add_media_command(sync: &Controller, args: AddMediaArgs) -> Result<()> {
    let path = edit_channel(sync, &args.channel, |tree| {
        Ok(tree.add_media(
            &args.parent,
            args.name,
            args.image_url,
            args.media_url,
            args.media_type,
        )?)
    })?;
    println!("Added {}", path);
    Ok(())
}

pub(super) fn handle_modify_command(sync: &Controller, args: ModifyArgs) -> Result<()> {
    let mut fields = Vec::new();
    if let Some(v) = args.name {
        fields.push(FieldUpdate::Name(v));
    }
    if let Some(v) = args.image_url {
        fields.push(FieldUpdate::ImageUrl(v));
    }
    if let Some(v) = args.media_url {
        fields.push(FieldUpdate::MediaUrl(v));
    }
    if let Some(v) = args.media_type {
        fields.push(FieldUpdate::MediaType(v));
    }
    if let Some(v) = args.looping {
        fields.push(FieldUpdate::Loop(v));
    }
    if fields.is_empty() {
        anyhow::bail!(
            "nothing to modify (pass --name, --image-url, --media-url, --media-type or --loop)"
        );
    }

    edit_channel(sync, &args.channel, |tree| Ok(tree.modify(&args.path, fields)?))?;
    println!("Modified {}", args.path);
    Ok(())
}

pub(super) fn handle_delete_command(sync: &Controller, args: DeleteArgs) -> Result<()> {
    let removed = edit_channel(sync, &args.channel, |tree| {
        Ok(tree.delete(&args.parent, args.index)?)
    })?;
    println!("Deleted {} ({})", removed.name(), removed.kind());
    Ok(())
}
