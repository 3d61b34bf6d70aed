use serde::{Deserialize, Serialize};

/// A country option for the origin/destination selects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, e.g. `"SG"`.
    pub code: String,
    pub label: String,
}

impl Country {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Sort countries for display, by label then code.
pub fn sort_countries(countries: &mut [Country]) {
    countries.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.code.cmp(&b.code)));
}
