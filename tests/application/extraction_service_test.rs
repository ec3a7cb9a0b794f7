use std::sync::Arc;

use bytes::Bytes;

use medbrief::application::services::ExtractionService;
use medbrief::domain::{BlockStatus, UploadedFile};

use super::fakes::{EchoExtractor, FailingExtractor, InMemoryScratchStore};

fn upload(name: &str, body: &'static [u8]) -> UploadedFile {
    UploadedFile::accept(name, Bytes::from_static(body)).unwrap()
}

#[tokio::test]
async fn given_mixed_uploads_when_extracting_then_one_block_per_file_in_order() {
    let scratch = Arc::new(InMemoryScratchStore::default());
    let service = ExtractionService::new(
        Arc::new(EchoExtractor),
        Arc::new(FailingExtractor("no ffmpeg")),
        Arc::new(EchoExtractor),
        scratch.clone(),
    );
    let files = vec![
        upload("a.txt", b"alpha"),
        upload("b.mp4", b"video"),
        upload("c.json", b"{}"),
    ];

    let blocks = service.extract_all(&files).await;

    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0].text, "alpha");
    assert_eq!(blocks[1].status, BlockStatus::Failed);
    assert_eq!(
        blocks[1].text,
        "Failed to process b.mp4: invalid structured data: no ffmpeg"
    );
    assert_eq!(blocks[2].text, "{}");
}

#[tokio::test]
async fn given_any_outcome_when_extracting_then_staged_upload_is_deleted() {
    let scratch = Arc::new(InMemoryScratchStore::default());
    let service = ExtractionService::new(
        Arc::new(FailingExtractor("bad json")),
        Arc::new(FailingExtractor("unused")),
        Arc::new(EchoExtractor),
        scratch.clone(),
    );
    let files = vec![upload("a.txt", b"alpha"), upload("b.json", b"{")];

    service.extract_all(&files).await;

    assert!(scratch.files.lock().unwrap().is_empty());
    assert_eq!(scratch.deleted.lock().unwrap().len(), 2);
}
