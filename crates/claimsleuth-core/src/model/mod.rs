/// Data model for ClaimSleuth.
///
/// Re-exports the claim table and supporting types.
pub mod claim;
pub mod columns;
pub mod format;

pub use claim::{ClaimRecord, ClaimTable};
