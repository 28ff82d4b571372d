use serde::{Deserialize, Serialize};

// ============================================================================
// Apply mode
// ============================================================================

/// Whether the tax targets the whole catalog or an explicit subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyTo {
    All,
    #[default]
    #[serde(rename = "some")]
    Specific,
}

impl ApplyTo {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplyTo::All => "all",
            ApplyTo::Specific => "some",
        }
    }

    pub fn from_str_value(value: &str) -> Option<Self> {
        match value {
            "all" => Some(ApplyTo::All),
            "some" => Some(ApplyTo::Specific),
            _ => None,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Record emitted by a successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSubmission {
    pub name: String,
    /// Rate as a fraction with two decimals, e.g. "0.50"
    pub rate: String,
    pub applied_to: ApplyTo,
    pub applicable_items: Vec<String>,
}
