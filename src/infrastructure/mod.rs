pub mod audio;
pub mod extraction;
pub mod llm;
pub mod observability;
pub mod runtime;
pub mod storage;
