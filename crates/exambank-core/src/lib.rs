//! exambank-core — Question bank model, fair sampling, and reveal state.
//!
//! This crate defines the data model for multiple-choice question banks,
//! the sampler that draws practice exams from them, and the per-question
//! reveal state that a rendering layer toggles while the user practices.

pub mod error;
pub mod model;
pub mod parser;
pub mod reveal;
pub mod sampler;
pub mod session;
pub mod statistics;
pub mod traits;

pub use error::LoadError;
pub use model::{ExamData, ExamMetadata, OptionKey, Question};
pub use reveal::{RevealFlag, RevealState};
pub use sampler::{sample, sample_with};
pub use session::{DisplayLabels, ExamSession, ExamVariant, LoadState};
pub use traits::BankSource;
