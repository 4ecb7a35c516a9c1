use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single advertising campaign as served by the campaigns endpoint.
///
/// Metrics are optional: absent, `null` or non-numeric values come through
/// as `None` instead of failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub status: CampaignStatus,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub clicks: Option<i64>,
    #[serde(default, deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub impressions: Option<i64>,
}

/// Campaign identifier. The endpoint sends integers, but string ids are
/// accepted too and shown verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum CampaignId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CampaignId::Number(id) => write!(f, "{}", id),
            CampaignId::Text(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum CampaignStatus {
    Active,
    Paused,
    /// Any status the dashboard does not know about, kept as sent.
    Other(String),
}

impl From<String> for CampaignStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Active" => CampaignStatus::Active,
            "Paused" => CampaignStatus::Paused,
            _ => CampaignStatus::Other(value),
        }
    }
}

impl From<CampaignStatus> for String {
    fn from(status: CampaignStatus) -> Self {
        match status {
            CampaignStatus::Other(value) => value,
            known => known.display_name().to_string(),
        }
    }
}

impl CampaignStatus {
    pub fn display_name(&self) -> &str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Other(value) => value,
        }
    }

    pub fn badge_class(&self) -> &str {
        match self {
            CampaignStatus::Active => "badge badge--success animate-pulse-subtle",
            _ => "badge badge--muted",
        }
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|amount| amount.is_finite()))
}

fn count_from_value(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    let count = number.as_i64().or_else(|| {
        // Integral floats such as 10.0
        number
            .as_f64()
            .filter(|n| n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64)
            .map(|n| n as i64)
    });

    if count.is_none() {
        tracing::warn!("Ignoring count that is not a representable integer: {}", number);
    }
    count
}
