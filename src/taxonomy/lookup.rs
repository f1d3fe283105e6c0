//! Label lookup over a category table with fallback to a default entry

use crate::io::error::{Result, invalid_parameter};
use crate::taxonomy::categories::{DEFAULT_CATEGORY_INDEX, LESION_CATEGORIES, LesionCategory};

/// Read-only view over a category table
///
/// The position of a category in the table is its classifier output index.
/// Labels are matched case-insensitively; unknown labels resolve silently to
/// the default category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Taxonomy {
    categories: &'static [LesionCategory],
    default_index: usize,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Taxonomy {
    /// The built-in six-category skin lesion taxonomy
    pub fn builtin() -> Self {
        Self {
            categories: &LESION_CATEGORIES,
            default_index: DEFAULT_CATEGORY_INDEX,
        }
    }

    /// Create a taxonomy over a custom category table
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty or `default_index` is out of range
    pub fn new(categories: &'static [LesionCategory], default_index: usize) -> Result<Self> {
        if categories.is_empty() {
            return Err(invalid_parameter(
                "categories",
                &0,
                &"taxonomy needs at least one category",
            ));
        }
        if default_index >= categories.len() {
            return Err(invalid_parameter(
                "default_index",
                &default_index,
                &format!("must be below category count {}", categories.len()),
            ));
        }
        Ok(Self {
            categories,
            default_index,
        })
    }

    /// All categories in classifier output order
    pub const fn categories(&self) -> &'static [LesionCategory] {
        self.categories
    }

    /// Number of categories
    pub const fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false; construction rejects empty tables
    pub const fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The fallback category for unrecognised labels
    pub fn default_category(&self) -> &'static LesionCategory {
        // Construction keeps the index in range
        self.categories
            .get(self.default_index)
            .unwrap_or(&LESION_CATEGORIES[DEFAULT_CATEGORY_INDEX])
    }

    /// Find the category whose name matches `label`, ignoring case
    pub fn lookup(&self, label: &str) -> Option<&'static LesionCategory> {
        let wanted = label.to_lowercase();
        self.categories
            .iter()
            .find(|category| category.name.to_lowercase() == wanted)
    }

    /// Like [`lookup`](Self::lookup), falling back to the default category
    pub fn resolve(&self, label: &str) -> &'static LesionCategory {
        self.lookup(label).unwrap_or_else(|| self.default_category())
    }

    /// Display name of the category at classifier output `index`
    pub fn label(&self, index: usize) -> Option<&'static str> {
        self.categories.get(index).map(|category| category.name)
    }
}
