#![allow(dead_code)]

use chrono::NaiveDate;

use booking_core::api::InMemoryBookingApi;
use booking_core::catalog::Catalog;
use booking_core::wizard::BookingWizard;

/// Fixed clock for deterministic calendars: a Friday in March 2025.
pub const TODAY: &str = "2025-03-14";

pub fn today() -> NaiveDate {
    TODAY.parse().expect("fixture date")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Wizard over the built-in sample catalog and an in-memory backend.
pub fn sample_wizard() -> BookingWizard {
    BookingWizard::new(
        Catalog::sample(),
        today(),
        Box::new(InMemoryBookingApi::new()),
    )
}

/// Drives a fresh wizard to the details step with a complete draft.
pub fn draft_to_details(wizard: &mut BookingWizard) {
    wizard.select_branch("olaya").expect("select branch");
    wizard.next().expect("advance to service");
    wizard.select_service("hydrafacial").expect("select service");
    wizard.next().expect("advance to date and time");
    wizard.select_date(date(2025, 3, 20)).expect("select date");
    wizard.select_slot("09:30").expect("select slot");
    wizard.next().expect("advance to details");
    wizard.set_full_name("Sara Youssef").expect("set name");
    wizard.set_phone("+966 55 123 4567").expect("set phone");
    wizard.set_policy_agreed(true).expect("accept policy");
}

/// Catalog JSON in the backend wire format, distinct from the sample so
/// tests can tell which source fed the wizard.
pub fn harbor_catalog_json() -> String {
    serde_json::json!({
        "branches": [
            {
                "id": "harbor",
                "name": { "en": "Harbor Clinic", "ar": "عيادة الميناء" },
                "address": { "en": "12 Corniche Road", "ar": "12 طريق الكورنيش" },
                "hours": { "en": "Sat-Thu 10:00-20:00", "ar": "السبت-الخميس 10:00-20:00" },
                "phone": "+966 12 555 0101",
                "whatsapp": "+966 55 555 0101",
                "rating": 4.2,
                "reviewCount": 57
            },
            {
                "id": "marina",
                "name": { "en": "Marina Clinic", "ar": "عيادة المارينا" },
                "address": { "en": "4 Marina Walk", "ar": "4 ممشى المارينا" },
                "hours": { "en": "Sat-Thu 09:00-18:00", "ar": "السبت-الخميس 09:00-18:00" },
                "phone": "+966 12 555 0202",
                "whatsapp": "+966 55 555 0202",
                "rating": 4.6,
                "reviewCount": 131
            }
        ],
        "services": [
            {
                "id": "glow",
                "slug": "glow-facial",
                "name": { "en": "Glow Facial", "ar": "فيشل الإشراقة" },
                "category": "Facial",
                "duration": 45,
                "priceRange": { "en": "280-420 SAR", "ar": "٢٨٠-٤٢٠ ريال" },
                "icon": "sun",
                "branches": ["harbor", "marina"]
            },
            {
                "id": "polish",
                "slug": "pearl-polish",
                "name": { "en": "Pearl Polish", "ar": "تلميع اللؤلؤ" },
                "category": "Dental",
                "duration": 30,
                "priceRange": { "en": "200-300 SAR", "ar": "٢٠٠-٣٠٠ ريال" },
                "icon": "smile",
                "branches": ["marina"]
            }
        ]
    })
    .to_string()
}
