//! Assessments shipped with the service.

use super::types::{Availability, Item};

pub(super) fn items() -> Vec<Item> {
    vec![
        Item::new(
            "Numerical Reasoning Test",
            "https://www.shl.com/en/assessments/numerical-reasoning/",
            "Cognitive",
            Availability::Yes,
            Availability::Yes,
            20,
            "Assesses numerical reasoning and data interpretation skills.",
        ),
        Item::new(
            "Situational Judgment Test",
            "https://www.shl.com/en/assessments/situational-judgement/",
            "Behavioral",
            Availability::Yes,
            Availability::No,
            25,
            "Evaluates decision making and judgment in work scenarios.",
        ),
        Item::new(
            "Verbal Reasoning Test",
            "https://www.shl.com/en/assessments/verbal-reasoning/",
            "Cognitive",
            Availability::No,
            Availability::Yes,
            20,
            "Measures verbal logic and reading comprehension.",
        ),
    ]
}
