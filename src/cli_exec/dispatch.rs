use super::channels::{
    handle_activate_command, handle_create_command, handle_lists_command, handle_show_command,
    handle_xml_command,
};
use super::edit::{
    handle_add_media_command, handle_add_sublist_command, handle_delete_command,
    handle_modify_command,
};
use super::identity::{handle_config_command, handle_login_command, handle_logout_command};
use super::workspace::{with_store, with_sync};
use super::*;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => handle_login_command(args.url, args.session)?,
        Commands::Logout => with_store(handle_logout_command)?,
        Commands::Config(args) => with_store(|store| handle_config_command(store, args.json))?,
        Commands::Lists(args) => with_sync(|sync| handle_lists_command(sync, args.json))?,
        Commands::Create(args) => with_sync(|sync| handle_create_command(sync, &args.channel))?,
        Commands::Activate(args) => {
            with_sync(|sync| handle_activate_command(sync, &args.channel))?
        }
        Commands::Show(args) => {
            with_sync(|sync| handle_show_command(sync, args.channel.as_deref(), args.json))?
        }
        Commands::Xml(args) => with_sync(|sync| handle_xml_command(sync, &args.channel))?,
        Commands::AddSublist(args) => with_sync(|sync| handle_add_sublist_command(sync, args))?,
        Commands::AddMedia(args) => with_sync(|sync| handle_add_media_command(sync, args))?,
        Commands::Modify(args) => with_sync(|sync| handle_modify_command(sync, args))?,
        Commands::Delete(args) => with_sync(|sync| handle_delete_command(sync, args))?,
    }

    Ok(())
}
