use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub kind: FileKind,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind of an accepted upload, resolved once from the filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    StructuredData(StructuredFormat),
    Media,
    PlainText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuredFormat {
    Json,
    Spreadsheet,
}

impl FileKind {
    /// Case-sensitive suffix match. `None` means the upload is dropped.
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".json") {
            Some(Self::StructuredData(StructuredFormat::Json))
        } else if filename.ends_with(".xlsx") || filename.ends_with(".xls") {
            Some(Self::StructuredData(StructuredFormat::Spreadsheet))
        } else if filename.ends_with(".mp4") {
            Some(Self::Media)
        } else if filename.ends_with(".txt") {
            Some(Self::PlainText)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StructuredData(StructuredFormat::Json) => "json",
            Self::StructuredData(StructuredFormat::Spreadsheet) => "spreadsheet",
            Self::Media => "media",
            Self::PlainText => "plain_text",
        }
    }
}

impl Document {
    pub fn new(filename: String, kind: FileKind, size_bytes: u64) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            kind,
            size_bytes,
        }
    }

    /// Last path component of the client-supplied filename.
    pub fn basename(&self) -> &str {
        self.filename
            .rsplit(['/', '\\'])
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or("upload")
    }
}
