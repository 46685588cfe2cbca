use storage::repository::{LocalStorageRepository, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_persists_items() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get_item("username").await.unwrap(), None);

    repo.set_item("username", "ana").await.unwrap();
    repo.set_item("username", "budi").await.unwrap();
    let stored = repo.get_item("username").await.expect("fetch");
    assert_eq!(stored.as_deref(), Some("budi"));

    repo.remove_item("username").await.unwrap();
    assert_eq!(repo.get_item("username").await.unwrap(), None);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate_twice?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    repo.set_item("k", "v").await.unwrap();
    assert_eq!(repo.get_item("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn storage_sqlite_survives_reconnect() {
    let dir = std::env::temp_dir().join(format!("edumate-storage-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("reconnect.sqlite3");
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}?mode=rwc", path.display());

    {
        let storage = Storage::sqlite(&url).await.expect("open");
        storage.local.set_item("username", "ana").await.unwrap();
    }

    let reopened = Storage::sqlite(&url).await.expect("reopen");
    let stored = reopened.local.get_item("username").await.unwrap();
    assert_eq!(stored.as_deref(), Some("ana"));
}
