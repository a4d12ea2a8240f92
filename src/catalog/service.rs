use serde::{Deserialize, Serialize};

use crate::catalog::text::LocalizedText;

/// A bookable treatment offered by one or more branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub slug: String,
    pub name: LocalizedText,
    pub category: String,
    /// Appointment length in minutes.
    #[serde(rename = "duration")]
    pub duration_min: u32,
    pub price_range: LocalizedText,
    #[serde(default)]
    pub icon: String,
    /// Ids of the branches that offer this service.
    #[serde(rename = "branches")]
    pub branch_ids: Vec<String>,
}

impl Service {
    pub fn offered_at(&self, branch_id: &str) -> bool {
        self.branch_ids.iter().any(|id| id == branch_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offered_at_checks_branch_membership() {
        let service = Service {
            id: "peel".into(),
            slug: "chemical-peel".into(),
            name: LocalizedText::new("Chemical Peel", "تقشير كيميائي"),
            category: "Dermatology".into(),
            duration_min: 40,
            price_range: LocalizedText::new("300-450 SAR", "٣٠٠-٤٥٠ ريال"),
            icon: "droplet".into(),
            branch_ids: vec!["nakheel".into()],
        };
        assert!(service.offered_at("nakheel"));
        assert!(!service.offered_at("olaya"));
    }

    #[test]
    fn wire_names_follow_the_backend_payload() {
        let json = r#"{
            "id": "consult",
            "slug": "skin-consultation",
            "name": { "en": "Skin Consultation", "ar": "استشارة جلدية" },
            "category": "Dermatology",
            "duration": 20,
            "priceRange": { "en": "150-250 SAR", "ar": "١٥٠-٢٥٠ ريال" },
            "icon": "stethoscope",
            "branches": ["olaya", "nakheel"]
        }"#;
        let service: Service = serde_json::from_str(json).expect("parse service");
        assert_eq!(service.duration_min, 20);
        assert_eq!(service.branch_ids, vec!["olaya", "nakheel"]);
    }
}
