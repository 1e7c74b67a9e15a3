//! The two application configurations served by the same CRUD machinery.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Which bookmark schema the server runs with.
///
/// - `Catalog`: title / category / description / link / image, with a
///   category filter, image uploads and the drop-table route.
/// - `Websites`: website name / aim / description / link, list and add only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Catalog,
    Websites,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Catalog => "catalog",
            Variant::Websites => "websites",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catalog" => Ok(Variant::Catalog),
            "websites" => Ok(Variant::Websites),
            other => Err(CoreError::Validation(format!(
                "Unknown variant '{other}'. Expected one of: catalog, websites"
            ))),
        }
    }
}
