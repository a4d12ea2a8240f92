use crate::catalog::text::Language;
use crate::wizard::draft::SelectionDraft;
use crate::wizard::step::Step;

/// One row of the booking summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub step: Step,
    pub label: &'static str,
    /// Populated once the owning step has data; `None` renders the
    /// placeholder.
    pub value: Option<String>,
    /// Whether the UI should offer jumping back to edit this entry.
    pub editable: bool,
}

impl SummaryEntry {
    /// Display text, substituting the unset placeholder.
    pub fn text(&self, language: Language) -> String {
        match &self.value {
            Some(value) => value.clone(),
            None => placeholder(language).to_string(),
        }
    }
}

/// Read-only projection of the draft, one entry per step in flow order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub entries: Vec<SummaryEntry>,
}

impl SummaryView {
    pub fn entry(&self, step: Step) -> Option<&SummaryEntry> {
        self.entries.iter().find(|entry| entry.step == step)
    }
}

fn placeholder(language: Language) -> &'static str {
    match language {
        Language::En => "Not selected yet",
        Language::Ar => "لم يُحدد بعد",
    }
}

fn label_for(step: Step, language: Language) -> &'static str {
    match (step, language) {
        (Step::Branch, Language::En) => "Branch",
        (Step::Branch, Language::Ar) => "الفرع",
        (Step::Service, Language::En) => "Service",
        (Step::Service, Language::Ar) => "الخدمة",
        (Step::DateTime, Language::En) => "Date & time",
        (Step::DateTime, Language::Ar) => "التاريخ والوقت",
        (Step::Details, Language::En) => "Details",
        (Step::Details, Language::Ar) => "البيانات",
    }
}

fn minutes_suffix(language: Language) -> &'static str {
    match language {
        Language::En => "min",
        Language::Ar => "دقيقة",
    }
}

/// Projects the draft into the summary panel.
///
/// Pure: the same draft, position, and language always produce the same
/// view. An entry is editable only after its owning step has been passed,
/// and nothing is editable once the booking is submitted.
pub fn project(
    draft: &SelectionDraft,
    current: Step,
    submitted: bool,
    language: Language,
) -> SummaryView {
    let branch = draft
        .branch
        .as_ref()
        .map(|branch| branch.name.pick(language).to_string());

    let service = draft.service.as_ref().map(|service| {
        format!(
            "{} ({} {})",
            service.name.pick(language),
            service.duration_min,
            minutes_suffix(language)
        )
    });

    let datetime = match (draft.date, draft.time) {
        (Some(date), Some(slot)) => Some(format!("{} {}", date.format("%Y-%m-%d"), slot)),
        (Some(date), None) => Some(date.format("%Y-%m-%d").to_string()),
        _ => None,
    };

    let details = {
        let mut parts = Vec::new();
        for part in [
            draft.contact.full_name.trim(),
            draft.contact.phone.trim(),
            draft.contact.email.trim(),
        ] {
            if !part.is_empty() {
                parts.push(part);
            }
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    };

    let values = [branch, service, datetime, details];
    let entries = Step::ALL
        .iter()
        .zip(values)
        .map(|(step, value)| SummaryEntry {
            step: *step,
            label: label_for(*step, language),
            value,
            editable: !submitted && *step < current,
        })
        .collect();

    SummaryView { entries }
}
