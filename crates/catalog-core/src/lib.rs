//! Conversion sessions for supplier catalogs.
//!
//! [`Session`] is the stateful front of the pipeline: it keeps the loaded
//! source, re-parses it on delimiter changes, normalizes through the vendor
//! profile and produces export documents. Asynchronous file reads are
//! sequenced with [`LoadTicket`]s so only the newest load is applied.

mod error;
mod options;
mod preview;
mod session;
mod state;

pub use error::{Result, SessionError};
pub use options::{DEFAULT_PREVIEW_LIMIT, SessionOptions};
pub use preview::Preview;
pub use session::Session;
pub use state::{ContentKind, LoadOutcome, LoadTicket, SessionPhase, SourceContent};
