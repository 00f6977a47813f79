//! Identifier normalization, child-ID generation, and lineage lookups.
//!
//! Every function here is pure over its inputs. Lineage data reaches the core
//! only through the read-only [`LineageSource`] trait.

pub mod clock;
pub mod error;
pub mod generate;
pub mod index;
pub mod normalize;
pub mod resolve;
pub mod source;

pub use clock::{LAB_UTC_OFFSET_MINUTES, resolve_date_suffix, today_at_offset};
pub use error::{CoreError, MalformedReason, Result};
pub use generate::next_child_id;
pub use index::LineageIndex;
pub use normalize::{normalize, normalize_core};
pub use resolve::{ResolvedMother, resolve_mother};
pub use source::LineageSource;
