use serde::{Deserialize, Serialize};

use crate::catalog::branch::Branch;
use crate::catalog::service::Service;
use crate::catalog::text::LocalizedText;
use crate::wizard::slots::SlotAvailability;

/// Reference data the wizard renders its choices from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub availability: SlotAvailability,
}

impl Catalog {
    pub fn new(
        branches: Vec<Branch>,
        services: Vec<Service>,
        availability: SlotAvailability,
    ) -> Self {
        Self {
            branches,
            services,
            availability,
        }
    }

    pub fn branch(&self, id: &str) -> Option<&Branch> {
        self.branches.iter().find(|branch| branch.id == id)
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    /// Services offered at the given branch, in catalog order.
    pub fn services_for_branch(&self, branch_id: &str) -> Vec<&Service> {
        self.services
            .iter()
            .filter(|service| service.offered_at(branch_id))
            .collect()
    }

    /// True when the wizard has nothing to offer and should show its
    /// empty state instead of the step screens.
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty() || self.services.is_empty()
    }

    /// Cross-reference problems worth reporting without refusing to run.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut seen = std::collections::BTreeSet::new();
        for branch in &self.branches {
            if !seen.insert(&branch.id) {
                warnings.push(format!("duplicate branch id \"{}\"", branch.id));
            }
        }
        seen.clear();
        for service in &self.services {
            if !seen.insert(&service.id) {
                warnings.push(format!("duplicate service id \"{}\"", service.id));
            }
        }
        for service in &self.services {
            if service.branch_ids.is_empty() {
                warnings.push(format!(
                    "service \"{}\" is not offered at any branch",
                    service.id
                ));
            }
            for branch_id in &service.branch_ids {
                if self.branch(branch_id).is_none() {
                    warnings.push(format!(
                        "service \"{}\" references unknown branch \"{}\"",
                        service.id, branch_id
                    ));
                }
            }
        }
        for branch in &self.branches {
            if self.services_for_branch(&branch.id).is_empty() {
                warnings.push(format!("branch \"{}\" has no services", branch.id));
            }
        }
        warnings
    }

    /// Built-in demo catalog used when no external source is configured.
    pub fn sample() -> Self {
        let branches = vec![
            Branch {
                id: "olaya".into(),
                name: LocalizedText::new("Olaya Clinic", "عيادة العليا"),
                address: LocalizedText::new(
                    "King Fahd Rd, Olaya, Riyadh",
                    "طريق الملك فهد، العليا، الرياض",
                ),
                hours: LocalizedText::new("Sat-Thu 9:00-21:00", "السبت-الخميس 9:00-21:00"),
                phone: "+966 11 234 5678".into(),
                whatsapp: "+966 55 234 5678".into(),
                rating: 4.7,
                review_count: 318,
            },
            Branch {
                id: "nakheel".into(),
                name: LocalizedText::new("Al Nakheel Clinic", "عيادة النخيل"),
                address: LocalizedText::new(
                    "Prince Turki St, Al Nakheel, Riyadh",
                    "شارع الأمير تركي، النخيل، الرياض",
                ),
                hours: LocalizedText::new("Sat-Thu 10:00-22:00", "السبت-الخميس 10:00-22:00"),
                phone: "+966 11 456 7890".into(),
                whatsapp: "+966 55 456 7890".into(),
                rating: 4.5,
                review_count: 204,
            },
            Branch {
                id: "khobar".into(),
                name: LocalizedText::new("Corniche Clinic", "عيادة الكورنيش"),
                address: LocalizedText::new("Corniche Blvd, Al Khobar", "شارع الكورنيش، الخبر"),
                hours: LocalizedText::new("Sat-Thu 9:00-20:00", "السبت-الخميس 9:00-20:00"),
                phone: "+966 13 889 2210".into(),
                whatsapp: "+966 55 889 2210".into(),
                rating: 4.8,
                review_count: 412,
            },
        ];

        let services = vec![
            Service {
                id: "consult".into(),
                slug: "skin-consultation".into(),
                name: LocalizedText::new("Skin Consultation", "استشارة جلدية"),
                category: "Dermatology".into(),
                duration_min: 20,
                price_range: LocalizedText::new("150-250 SAR", "١٥٠-٢٥٠ ريال"),
                icon: "stethoscope".into(),
                branch_ids: vec!["olaya".into(), "nakheel".into(), "khobar".into()],
            },
            Service {
                id: "hydrafacial".into(),
                slug: "hydrafacial-signature".into(),
                name: LocalizedText::new("Signature HydraFacial", "هيدرافيشل مميز"),
                category: "Facial".into(),
                duration_min: 50,
                price_range: LocalizedText::new("350-550 SAR", "٣٥٠-٥٥٠ ريال"),
                icon: "sparkles".into(),
                branch_ids: vec!["olaya".into(), "khobar".into()],
            },
            Service {
                id: "laser-full".into(),
                slug: "full-body-laser".into(),
                name: LocalizedText::new("Full Body Laser", "ليزر الجسم الكامل"),
                category: "Laser".into(),
                duration_min: 90,
                price_range: LocalizedText::new("900-1400 SAR", "٩٠٠-١٤٠٠ ريال"),
                icon: "zap".into(),
                branch_ids: vec!["olaya".into(), "nakheel".into()],
            },
            Service {
                id: "peel".into(),
                slug: "chemical-peel".into(),
                name: LocalizedText::new("Chemical Peel", "تقشير كيميائي"),
                category: "Dermatology".into(),
                duration_min: 40,
                price_range: LocalizedText::new("300-450 SAR", "٣٠٠-٤٥٠ ريال"),
                icon: "droplet".into(),
                branch_ids: vec!["nakheel".into()],
            },
            Service {
                id: "whitening".into(),
                slug: "teeth-whitening".into(),
                name: LocalizedText::new("Teeth Whitening", "تبييض الأسنان"),
                category: "Dental".into(),
                duration_min: 60,
                price_range: LocalizedText::new("600-900 SAR", "٦٠٠-٩٠٠ ريال"),
                icon: "smile".into(),
                branch_ids: vec!["khobar".into()],
            },
        ];

        Self::new(branches, services, SlotAvailability::fixture())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_is_consistent() {
        let catalog = Catalog::sample();
        assert!(!catalog.is_empty());
        assert!(catalog.warnings().is_empty(), "{:?}", catalog.warnings());
    }

    #[test]
    fn services_for_branch_filters_by_membership() {
        let catalog = Catalog::sample();
        let ids: Vec<&str> = catalog
            .services_for_branch("khobar")
            .iter()
            .map(|service| service.id.as_str())
            .collect();
        assert_eq!(ids, vec!["consult", "hydrafacial", "whitening"]);
    }

    #[test]
    fn warnings_catch_dangling_branch_references() {
        let mut catalog = Catalog::sample();
        catalog.services[0].branch_ids.push("atlantis".into());
        let warnings = catalog.warnings();
        assert!(warnings
            .iter()
            .any(|w| w.contains("unknown branch \"atlantis\"")));
    }

    #[test]
    fn warnings_catch_duplicate_ids() {
        let mut catalog = Catalog::sample();
        let copy = catalog.branches[0].clone();
        catalog.branches.push(copy);
        let copy = catalog.services[1].clone();
        catalog.services.push(copy);
        let warnings = catalog.warnings();
        assert!(warnings
            .iter()
            .any(|w| w.contains("duplicate branch id \"olaya\"")));
        assert!(warnings
            .iter()
            .any(|w| w.contains("duplicate service id \"hydrafacial\"")));
    }

    #[test]
    fn empty_catalog_reports_empty() {
        assert!(Catalog::default().is_empty());
        let only_branches = Catalog {
            branches: Catalog::sample().branches,
            ..Catalog::default()
        };
        assert!(only_branches.is_empty());
    }
}
