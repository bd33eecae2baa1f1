use chanbuild::model::RemoteConfig;

use super::*;

pub(super) fn handle_login_command(url: String, session: String) -> Result<()> {
    let cwd = std::env::current_dir().context("get current dir")?;
    let store = match LocalStore::discover(&cwd) {
        Ok(store) => store,
        Err(_) => LocalStore::init(&cwd)?,
    };

    let mut cfg = store.read_config()?;
    let remote = RemoteConfig { base_url: url };
    store
        .set_session(&remote, &session)
        .context("store session in state.json")?;
    cfg.remote = Some(remote);
    store.write_config(&cfg)?;
    println!("Logged in ({})", store.root().display());
    Ok(())
}

pub(super) fn handle_logout_command(store: &LocalStore) -> Result<()> {
    let remote = store
        .read_config()?
        .remote
        .context("no backend configured (run `chanbuild login --url ... --session ...`)")?;
    store.clear_session(&remote).context("clear session")?;
    println!("Logged out");
    Ok(())
}

pub(super) fn handle_config_command(store: &LocalStore, json: bool) -> Result<()> {
    let cfg = store.read_config()?;
    let has_session = match &cfg.remote {
        Some(remote) => store.get_session(remote)?.is_some(),
        None => false,
    };

    if json {
        let out = serde_json::json!({
            "remote": cfg.remote,
            "session": if has_session { "stored" } else { "missing" },
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serialize config json")?
        );
    } else if let Some(remote) = cfg.remote {
        println!("url: {}", remote.base_url);
        println!("session: {}", if has_session { "stored" } else { "missing" });
    } else {
        println!("No backend configured");
    }
    Ok(())
}
