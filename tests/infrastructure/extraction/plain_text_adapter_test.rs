use std::sync::Arc;

use medbrief::application::ports::{
    DetectedText, EncodingDetector, ExtractionError, FileExtractor,
};
use medbrief::domain::{Document, FileKind};
use medbrief::infrastructure::extraction::{ChardetngDetector, PlainTextAdapter};

fn text_document(name: &str, len: usize) -> Document {
    Document::new(name.to_string(), FileKind::PlainText, len as u64)
}

struct FixedDetector;

impl EncodingDetector for FixedDetector {
    fn detect_and_decode(&self, _data: &[u8]) -> Option<DetectedText> {
        Some(DetectedText {
            encoding: "test".to_string(),
            text: "detected".to_string(),
        })
    }
}

#[tokio::test]
async fn given_utf8_bytes_when_extracting_then_wraps_with_filename_heading() {
    let data = "睡眠六小時".as_bytes();

    let text = PlainTextAdapter::new()
        .extract_text(data, &text_document("notes.txt", data.len()))
        .await
        .unwrap();

    assert_eq!(text, "# 檔案: notes.txt\n\n睡眠六小時\n\n");
}

#[tokio::test]
async fn given_big5_bytes_when_extracting_then_decodes_traditional_chinese() {
    let data: &[u8] = &[0xA4, 0xA4, 0xA4, 0xE5];

    let text = PlainTextAdapter::new()
        .extract_text(data, &text_document("legacy.txt", data.len()))
        .await
        .unwrap();

    assert_eq!(text, "# 檔案: legacy.txt\n\n中文\n\n");
}

#[tokio::test]
async fn given_utf16le_bytes_with_bom_when_extracting_then_decodes_before_detection() {
    let mut data = vec![0xFF, 0xFE];
    data.extend("每晚睡六小時 sleep".encode_utf16().flat_map(u16::to_le_bytes));

    let text = PlainTextAdapter::with_detector(Arc::new(ChardetngDetector))
        .extract_text(&data, &text_document("notes.txt", data.len()))
        .await
        .unwrap();

    assert_eq!(text, "# 檔案: notes.txt\n\n每晚睡六小時 sleep\n\n");
}

#[tokio::test]
async fn given_utf8_bom_when_extracting_then_strips_the_mark() {
    let mut data = vec![0xEF, 0xBB, 0xBF];
    data.extend_from_slice("壓力高".as_bytes());

    let text = PlainTextAdapter::new()
        .extract_text(&data, &text_document("bom.txt", data.len()))
        .await
        .unwrap();

    assert_eq!(text, "# 檔案: bom.txt\n\n壓力高\n\n");
}

#[tokio::test]
async fn given_undecodable_bytes_without_detector_when_extracting_then_reports_encoding() {
    let data: &[u8] = &[0x81];

    let result = PlainTextAdapter::new()
        .extract_text(data, &text_document("broken.txt", data.len()))
        .await;

    match result {
        Err(ExtractionError::UnreadableEncoding(name)) => assert_eq!(name, "broken.txt"),
        other => panic!("expected UnreadableEncoding, got {:?}", other),
    }
}

#[tokio::test]
async fn given_undecodable_bytes_with_detector_when_extracting_then_uses_detection() {
    let data: &[u8] = &[0x81];

    let text = PlainTextAdapter::with_detector(Arc::new(FixedDetector))
        .extract_text(data, &text_document("odd.txt", data.len()))
        .await
        .unwrap();

    assert_eq!(text, "# 檔案: odd.txt\n\ndetected\n\n");
}

#[tokio::test]
async fn given_non_text_kind_when_extracting_then_returns_unsupported_kind() {
    let document = Document::new("a.mp4".to_string(), FileKind::Media, 0);

    let result = PlainTextAdapter::default().extract_text(b"x", &document).await;

    assert!(matches!(result, Err(ExtractionError::UnsupportedKind(_))));
}

#[test]
fn given_ascii_bytes_when_detecting_then_decodes_them() {
    let detected = ChardetngDetector
        .detect_and_decode(b"plain ascii text")
        .unwrap();

    assert_eq!(detected.text, "plain ascii text");
}
