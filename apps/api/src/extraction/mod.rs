// Text recovery for uploaded resumes.
// PDFs go through the heuristic byte scanner; Word documents through the DOCX reader.
// Both are CPU-bound and must run inside tokio::task::spawn_blocking.

pub mod decoders;
pub mod docx;
pub mod handlers;
pub mod patterns;
pub mod recovery;
pub mod upload;

pub use recovery::{BinaryTextRecovery, RecoveryLimits};
