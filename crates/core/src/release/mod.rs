//! Release records as shown to the user.
//!
//! Catalog rows are turned into [`NormalizedRecord`]s here, or rejected with a
//! [`Rejection`] reason. Normalization is pure and never fails with an error.
//! Survivors of the filter pass are collected into a [`ResultSet`].

mod normalize;
mod result_set;
mod types;

pub use normalize::{bytes_to_gib, normalize, ADULT_CATEGORY_MARKERS, BYTES_PER_GIB};
pub use result_set::ResultSet;
pub use types::{NormalizedRecord, Rejection};
