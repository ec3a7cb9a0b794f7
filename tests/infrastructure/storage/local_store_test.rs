use bytes::Bytes;
use chrono::{TimeZone, Utc};

use medbrief::application::ports::{ReportStore, ScratchStore};
use medbrief::domain::{Document, FileKind, ReportName, StoragePath};
use medbrief::infrastructure::storage::LocalFileStore;

fn create_test_store() -> (tempfile::TempDir, LocalFileStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalFileStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

fn staged_path() -> StoragePath {
    let document = Document::new("notes.txt".to_string(), FileKind::PlainText, 0);
    StoragePath::for_document(&document)
}

#[tokio::test]
async fn given_upload_when_storing_then_returns_size_and_fetch_matches() {
    let (_dir, store) = create_test_store();
    let path = staged_path();

    let size = store
        .store(&path, Bytes::from_static(b"hello world"))
        .await
        .unwrap();
    let fetched = store.fetch(&path).await.unwrap();

    assert_eq!(size, 11);
    assert_eq!(fetched, b"hello world");
}

#[tokio::test]
async fn given_stored_upload_when_deleting_then_fetch_fails() {
    let (_dir, store) = create_test_store();
    let path = staged_path();
    store.store(&path, Bytes::from_static(b"data")).await.unwrap();

    store.delete(&path).await.unwrap();

    assert!(store.fetch(&path).await.is_err());
}

#[tokio::test]
async fn given_missing_directory_when_creating_store_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path().join("nested").join("reports");

    LocalFileStore::new(root.clone()).unwrap();

    assert!(root.is_dir());
}

#[tokio::test]
async fn given_report_when_saving_then_file_is_written_under_root() {
    let (dir, store) = create_test_store();
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let name = ReportName::new("report", &timestamp);

    let location = store.save(&name, "# AI 醫生診前報告\n\n").await.unwrap();

    let expected = dir.path().join("report_20250102_030405.md");
    assert_eq!(location, expected.display().to_string());
    assert_eq!(
        std::fs::read_to_string(expected).unwrap(),
        "# AI 醫生診前報告\n\n"
    );
}
