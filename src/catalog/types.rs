use serde::{Deserialize, Serialize};

/// Yes/No capability flag, serialized as `"Yes"` / `"No"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    Yes,
    No,
}

impl Availability {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Yes => "Yes",
            Availability::No => "No",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog entry.
///
/// `description` is scoring input only and never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    /// Reference link, treated as opaque.
    pub url: String,
    /// Category name, e.g. `Cognitive` or `Behavioral`.
    pub test_type: String,
    pub remote_testing: Availability,
    pub adaptive_support: Availability,
    pub duration_minutes: u32,
    pub description: String,
}

impl Item {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        test_type: impl Into<String>,
        remote_testing: Availability,
        adaptive_support: Availability,
        duration_minutes: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            test_type: test_type.into(),
            remote_testing,
            adaptive_support,
            duration_minutes,
            description: description.into(),
        }
    }
}
