//! Data model shared by every catalog conversion stage.
//!
//! - [`FieldMap`], [`RawRecord`] and [`CanonicalRecord`]: ordered name/value rows
//! - [`Schema`]: the ordered column set a table is laid out against
//! - [`Delimiter`]: the closed set of text field separators
//! - [`PositionalLayout`]: index-to-name maps for header-less supplier files

pub mod delimiter;
pub mod error;
pub mod layout;
pub mod record;
pub mod schema;
pub mod table;

pub use delimiter::Delimiter;
pub use error::{ModelError, Result};
pub use layout::{PositionalColumn, PositionalLayout};
pub use record::{CanonicalRecord, FieldMap, RawRecord};
pub use schema::Schema;
pub use table::{CanonicalTable, RawTable, Table};
