pub mod catalog;
pub mod docs;
pub mod error;
pub mod meta;
pub mod search;
pub mod tracing;

pub use catalog::{PageInfo, Toc};
pub use docs::Documentation;
pub use error::{ReadError, Result};
pub use meta::DocumentRecord;
pub use search::{IndexEntry, SearchHit, SearchIndex};
