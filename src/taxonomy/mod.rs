//! Skin lesion taxonomy: static category data and label lookup

/// Built-in category table and severity classes
pub mod categories;
/// Case-insensitive label resolution with default fallback
pub mod lookup;

pub use categories::{LesionCategory, Severity};
pub use lookup::Taxonomy;
