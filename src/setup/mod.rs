//! The setup engine: classify argv tokens, decide what to do, and either
//! render help or apply the selected options.
//!
//! ```text
//! tokens ──▶ classify ──▶ dispatch ──┬──▶ help (text to an io::Write)
//!                                    └──▶ apply (file-system effects)
//! ```
pub mod apply;
pub mod classify;
pub mod context;
pub mod dispatch;
pub mod help;
pub mod json;

pub use apply::{ActionChange, ActionOutcome, ExecutionReport, apply};
pub use classify::{ClassificationResult, classify};
pub use context::Context;
pub use dispatch::{Resolution, dispatch};
