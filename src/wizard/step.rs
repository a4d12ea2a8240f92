use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::text::Language;

/// Ordered screens of the booking flow.
///
/// Variant order is the flow order; `Ord` follows it, so "earlier step"
/// comparisons read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    Branch,
    Service,
    DateTime,
    Details,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Branch, Step::Service, Step::DateTime, Step::Details];

    /// One-based position shown in the progress header.
    pub fn index(self) -> usize {
        match self {
            Step::Branch => 1,
            Step::Service => 2,
            Step::DateTime => 3,
            Step::Details => 4,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Branch => Some(Step::Service),
            Step::Service => Some(Step::DateTime),
            Step::DateTime => Some(Step::Details),
            Step::Details => None,
        }
    }

    pub fn prev(self) -> Option<Step> {
        match self {
            Step::Branch => None,
            Step::Service => Some(Step::Branch),
            Step::DateTime => Some(Step::Service),
            Step::Details => Some(Step::DateTime),
        }
    }

    pub fn is_last(self) -> bool {
        self == Step::Details
    }

    /// Screen title in the requested language.
    pub fn title(self, language: Language) -> &'static str {
        match (self, language) {
            (Step::Branch, Language::En) => "Choose a branch",
            (Step::Branch, Language::Ar) => "اختر الفرع",
            (Step::Service, Language::En) => "Choose a service",
            (Step::Service, Language::Ar) => "اختر الخدمة",
            (Step::DateTime, Language::En) => "Pick a date and time",
            (Step::DateTime, Language::Ar) => "اختر التاريخ والوقت",
            (Step::Details, Language::En) => "Your details",
            (Step::Details, Language::Ar) => "بياناتك",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Branch => "Branch",
            Step::Service => "Service",
            Step::DateTime => "Date & time",
            Step::Details => "Details",
        };
        f.write_str(name)
    }
}
