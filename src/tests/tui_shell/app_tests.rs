use super::*;
use crate::test_support::MemoryBackend;
use crate::tui_shell::event_loop::handle_key;

const HOME: &str = r#"{"name":"Home","type":"sublist","entries":[
    {"name":"Clip1","type":"video","mediaUrl":"a.mp4","mediaType":"mp4"},
    {"name":"Shows","type":"sublist","entries":[
        {"name":"Ep1","type":"video","mediaUrl":"e1.mp4","mediaType":"mp4"}
    ]}
]}"#;

fn app() -> App<MemoryBackend> {
    let backend = MemoryBackend::new()
        .with_channel("Home", HOME)
        .with_channel("Kids", r#"{"entries": []}"#)
        .with_active("Home");
    let mut app = App::new(SyncController::new(backend), None);
    app.bootstrap();
    app
}

fn press(app: &mut App<MemoryBackend>, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App<MemoryBackend>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn stored(app: &App<MemoryBackend>, name: &str) -> crate::model::ChannelTree {
    let doc = app.sync.backend().stored(name).unwrap();
    crate::wire::from_wire_str(name, &doc).unwrap()
}

fn status(app: &App<MemoryBackend>) -> (StatusKind, String) {
    let s = app.status.as_ref().unwrap();
    (s.kind, s.text.clone())
}

fn selected(app: &App<MemoryBackend>) -> String {
    app.open()
        .and_then(|o| o.selection.selected())
        .map(|p| p.to_string())
        .unwrap_or_default()
}

#[test]
fn bootstrap_opens_active_channel_with_root_selected() {
    let app = app();
    assert_eq!(app.registry.list(), ["Home", "Kids"]);
    assert_eq!(app.open().map(|o| o.name()), Some("Home"));
    assert_eq!(app.focus, Focus::Tree);
    assert_eq!(selected(&app), "/");
    assert_eq!(app.channel_cursor, 0);
}

#[test]
fn add_sublist_under_root_saves_and_selects_it() {
    let mut app = app();
    press(&mut app, KeyCode::Char('s'));
    assert!(app.modal.is_some());
    type_text(&mut app, "Kids Corner");
    press(&mut app, KeyCode::Enter);

    assert!(app.modal.is_none());
    assert_eq!(selected(&app), "/2");
    assert_eq!(status(&app).0, StatusKind::Info);

    let tree = stored(&app, "Home");
    assert_eq!(tree.root().children.len(), 3);
    assert_eq!(tree.root().children[2].name(), "Kids Corner");
}

#[test]
fn add_under_media_is_refused_without_prompt() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    assert_eq!(selected(&app), "/0");

    press(&mut app, KeyCode::Char('m'));
    assert!(app.modal.is_none());
    let (kind, text) = status(&app);
    assert_eq!(kind, StatusKind::Error);
    assert!(text.contains("not a sublist"));
}

#[test]
fn add_media_prompts_for_name_then_url() {
    let mut app = app();
    // Select Shows and expand it.
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(selected(&app), "/1");

    press(&mut app, KeyCode::Char('m'));
    type_text(&mut app, "Ep2");
    press(&mut app, KeyCode::Enter);
    assert!(app.modal.is_some());
    type_text(&mut app, "e2.mp4");
    press(&mut app, KeyCode::Enter);

    assert_eq!(selected(&app), "/1/1");
    let tree = stored(&app, "Home");
    let m = tree
        .get(&"/1/1".parse().unwrap())
        .and_then(|n| n.as_media())
        .unwrap();
    assert_eq!(m.name, "Ep2");
    assert_eq!(m.media_url, "e2.mp4");
    assert_eq!(m.media_type, MediaType::Mp4);
}

#[test]
fn toggles_apply_to_media_and_refuse_sublists() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('t'));

    let tree = stored(&app, "Home");
    let m = tree
        .get(&"/0".parse().unwrap())
        .and_then(|n| n.as_media())
        .unwrap();
    assert!(m.looping);
    assert_eq!(m.media_type, MediaType::Audio);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('l'));
    let (kind, text) = status(&app);
    assert_eq!(kind, StatusKind::Error);
    assert!(text.contains("'loop'"));
}

#[test]
fn edit_name_prefills_current_value() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.modal.as_ref().map(|m| m.input.buf.as_str()), Some("Clip1"));

    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "0");
    press(&mut app, KeyCode::Enter);
    assert_eq!(stored(&app, "Home").root().children[0].name(), "Clip0");
}

#[test]
fn renaming_root_is_refused() {
    let mut app = app();
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "x");
    press(&mut app, KeyCode::Enter);

    assert_eq!(status(&app).0, StatusKind::Error);
    assert_eq!(app.open().unwrap().name(), "Home");
    assert!(
        !app.sync
            .backend()
            .calls()
            .contains(&"set_channel_list".to_string())
    );
}

#[test]
fn delete_asks_for_confirmation() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));
    assert!(app.modal.is_none());
    assert_eq!(stored(&app, "Home").root().children.len(), 2);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(selected(&app), "/");
    let tree = stored(&app, "Home");
    assert_eq!(tree.root().children.len(), 1);
    assert_eq!(tree.len(), 2);
}

#[test]
fn failed_save_keeps_local_edit_and_reports_it() {
    let mut app = app();
    app.sync.backend().fail_on("set_channel_list");

    press(&mut app, KeyCode::Char('s'));
    type_text(&mut app, "Local");
    press(&mut app, KeyCode::Enter);

    let (kind, text) = status(&app);
    assert_eq!(kind, StatusKind::Error);
    assert!(text.contains("local edit kept"));
    assert_eq!(app.open().unwrap().tree.root().children.len(), 3);
    assert_eq!(stored(&app, "Home").root().children.len(), 2);
}

#[test]
fn channel_pane_creates_opens_and_activates() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Channels);

    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "Music");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.registry.list(), ["Home", "Kids", "Music"]);
    assert_eq!(app.cursor_channel(), Some("Music"));

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.registry.active(), Some("Music"));

    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.open().map(|o| o.name()), Some("Kids"));
    assert_eq!(app.focus, Focus::Tree);
}

#[test]
fn refresh_keeps_selection_when_still_valid() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(selected(&app), "/0");
    assert_eq!(app.open().unwrap().tree.root().children.len(), 2);
}

#[test]
fn escape_closes_modal_before_quitting() {
    let mut app = app();
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Esc);
    assert!(app.modal.is_none());
    assert!(!app.quit);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.quit);
}
