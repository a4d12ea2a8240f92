use serde::{Deserialize, Serialize};

use crate::catalog::text::LocalizedText;

/// A clinic location a visitor can book into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    pub name: LocalizedText,
    pub address: LocalizedText,
    /// Opening hours as display text, not parsed.
    pub hours: LocalizedText,
    pub phone: String,
    pub whatsapp: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
}
