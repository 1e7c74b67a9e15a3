//! Query parameter types for bookmark listing.

use serde::Deserialize;

/// `?category=` filter. Absent and empty both mean "no filter".
#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

impl CategoryParams {
    /// The selected category, empty when none was given.
    pub fn selected(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}
