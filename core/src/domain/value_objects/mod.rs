//! Value objects shared by the dispatch pipeline.

pub mod outcome;
pub mod selection;

pub use outcome::{DispatchSummary, SendOutcome, SendStatus};
pub use selection::{CredentialOwner, ResolvedCredential, Selection, SelectionKind};
