use clubhub::service::app_state::{RecordKind, Results};
use clubhub::service::directory_actor::{self, DirectoryHandle};
use clubhub::service::{DirectoryArgs, DispatchOutcome, UiEvent};
use clubhub::types::{Club, DiscoverMode};
use clubhub::{PersistentStore, SeedDataset, StoreKey};
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_db(label: &str) -> (PathBuf, String) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "clubhub-{label}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));
    let database_url = format!("sqlite:{}", temp_path.display());
    (temp_path, database_url)
}

async fn open_session(database_url: &str) -> (DirectoryHandle, PersistentStore) {
    let store = PersistentStore::open(database_url)
        .await
        .expect("failed to open store");
    let handle = directory_actor::spawn(DirectoryArgs {
        seed: SeedDataset::bundled().expect("bundled seed parses"),
        store: store.clone(),
        discover_tag_count: 10,
        rng_seed: Some(7),
    })
    .await
    .expect("failed to spawn directory");
    (handle, store)
}

async fn send(handle: &DirectoryHandle, event: UiEvent) -> DispatchOutcome {
    handle.dispatch(event).await.expect("dispatch failed")
}

#[tokio::test]
async fn user_data_survives_a_restart() {
    let (temp_path, database_url) = temp_db("restart");

    let (handle, store) = open_session(&database_url).await;
    send(&handle, UiEvent::ToggleHeart(2)).await;
    send(&handle, UiEvent::ToggleHeart(9_999)).await;

    send(&handle, UiEvent::OpenClubForm).await;
    for (field, value) in [
        ("name", "Astronomy Society"),
        ("interests", "science, stars"),
        ("vibes", "chill"),
    ] {
        send(
            &handle,
            UiEvent::SetField {
                field: field.into(),
                value: value.into(),
            },
        )
        .await;
    }
    let created = send(&handle, UiEvent::Submit).await;
    let DispatchOutcome::Created {
        kind: RecordKind::Club,
        id: club_id,
    } = created
    else {
        panic!("expected a created club, got {created:?}");
    };

    send(&handle, UiEvent::SetMode(DiscoverMode::Requests)).await;
    send(&handle, UiEvent::OpenRequestForm).await;
    for (field, value) in [("club_name", "Astronomy Society"), ("title", "Telescope hire")] {
        send(
            &handle,
            UiEvent::SetField {
                field: field.into(),
                value: value.into(),
            },
        )
        .await;
    }
    assert!(matches!(
        send(&handle, UiEvent::Submit).await,
        DispatchOutcome::Created {
            kind: RecordKind::Request,
            ..
        }
    ));

    let ids: Vec<i64> = store.load_or_default(StoreKey::HeartedClubIds).await;
    assert_eq!(ids, vec![9_999, 2]);
    let clubs: Vec<Club> = store.load_or_default(StoreKey::UserClubs).await;
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].id, club_id);
    handle.stop();

    let (handle, _store) = open_session(&database_url).await;
    let view = handle.view().await.expect("view failed");
    // The dangling heart is kept in storage but not rendered.
    assert_eq!(view.hearted.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2]);
    let Results::Clubs(cards) = &view.results else {
        panic!("expected clubs view");
    };
    let last = cards.last().expect("clubs present");
    assert_eq!(last.club.name, "Astronomy Society");
    assert_eq!(last.club.interests, vec!["science", "stars"]);

    send(&handle, UiEvent::SetMode(DiscoverMode::Requests)).await;
    send(&handle, UiEvent::SetQuery("telescope".into())).await;
    let view = handle.view().await.expect("view failed");
    assert_eq!(view.results.len(), 1);
    handle.stop();

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn empty_name_submission_is_silent() {
    let (temp_path, database_url) = temp_db("empty-name");
    let (handle, store) = open_session(&database_url).await;

    send(&handle, UiEvent::OpenClubForm).await;
    let outcome = send(&handle, UiEvent::Submit).await;
    assert!(matches!(outcome, DispatchOutcome::Rejected(_)));

    let view = handle.view().await.expect("view failed");
    assert!(view.modal.is_some());
    let stored: Option<Vec<Club>> = store
        .try_load(StoreKey::UserClubs)
        .await
        .expect("store readable");
    assert!(stored.is_none());
    handle.stop();

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn corrupt_entries_fall_back_to_empty() {
    let (temp_path, database_url) = temp_db("corrupt");
    {
        let store = PersistentStore::open(&database_url)
            .await
            .expect("failed to open store");
        store
            .kv()
            .set(StoreKey::HeartedClubIds.as_str(), "[1, \"two\"")
            .await
            .expect("raw write");
    }

    let (handle, _store) = open_session(&database_url).await;
    let view = handle.view().await.expect("view failed");
    assert!(view.hearted.is_empty());
    assert_eq!(
        view.results.len(),
        SeedDataset::bundled().unwrap().clubs.len()
    );
    handle.stop();

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn terminal_loop_renders_after_each_command() {
    let (temp_path, database_url) = temp_db("terminal");
    let (handle, _store) = open_session(&database_url).await;

    let script = b"search cricket\nheart 1\nbogus\nmode vendors\nquit\nsearch never-reached\n";
    let mut output: Vec<u8> = Vec::new();
    clubhub::ui::terminal::run(&handle, &script[..], &mut output)
        .await
        .expect("terminal loop failed");

    let text = String::from_utf8(output).expect("utf-8 output");
    assert!(text.contains("search: cricket"));
    assert!(text.contains("♥ [1] Cricket Club"));
    assert!(text.contains("Unknown command: bogus"));
    assert!(text.contains("[vendors]"));
    assert!(!text.contains("never-reached"));
    handle.stop();

    let _ = fs::remove_file(&temp_path);
}

async fn run_script(handle: &DirectoryHandle, script: &[u8]) -> String {
    let mut output: Vec<u8> = Vec::new();
    clubhub::ui::terminal::run(handle, script, &mut output)
        .await
        .expect("terminal loop failed");
    String::from_utf8(output).expect("utf-8 output")
}

#[tokio::test]
async fn terminal_loop_survives_invalid_utf8_input() {
    let (temp_path, database_url) = temp_db("terminal-bytes");
    let (handle, _store) = open_session(&database_url).await;

    let text = run_script(&handle, b"search caf\xe9\nsearch chess\nquit\n").await;
    assert!(text.contains("search: caf\u{fffd}"));
    assert!(text.contains("search: chess"));
    handle.stop();

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn terminal_empty_name_submit_shows_no_error() {
    let (temp_path, database_url) = temp_db("terminal-empty");
    let (handle, _store) = open_session(&database_url).await;

    let text = run_script(&handle, b"register\nsubmit\nquit\n").await;
    // Opened once, re-rendered after the rejected submit.
    assert_eq!(text.matches("register a club").count(), 2);
    assert!(!text.contains("required field"));
    assert!(!text.contains("try `help`"));
    handle.stop();

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn terminal_reports_unknown_form_field() {
    let (temp_path, database_url) = temp_db("terminal-field");
    let (handle, _store) = open_session(&database_url).await;

    let text = run_script(&handle, b"register\nset nmae Chess\nquit\n").await;
    assert!(text.contains("unknown form field `nmae` (try `help`)"));
    assert_eq!(text.matches("register a club").count(), 2);
    handle.stop();

    let _ = fs::remove_file(&temp_path);
}
