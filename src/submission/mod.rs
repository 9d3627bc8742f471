//! Tool submission - drafts, validation and the gateway collaborator

pub mod draft;
pub mod gateway;

pub use draft::{DraftField, ToolDraft};
pub use gateway::{MockSubmissionGateway, SubmissionError, SubmissionGateway, SubmissionReceipt};
