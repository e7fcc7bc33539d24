use serde::{Deserialize, Serialize};

use crate::catalog::{Availability, Item};

/// Public view of a catalog item. The description is deliberately omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub url: String,
    pub test_type: String,
    pub remote_testing: Availability,
    pub adaptive_support: Availability,
    pub duration_minutes: u32,
}

impl From<&Item> for Recommendation {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            url: item.url.clone(),
            test_type: item.test_type.clone(),
            remote_testing: item.remote_testing,
            adaptive_support: item.adaptive_support,
            duration_minutes: item.duration_minutes,
        }
    }
}
