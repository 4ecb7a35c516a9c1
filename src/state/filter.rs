use std::str::FromStr;
use thiserror::Error;

use crate::models::{Campaign, CampaignStatus};

/// The status selector's value. `All` means no filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Paused,
}

impl StatusFilter {
    /// Selector options, in display order.
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Paused];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Paused => "Paused",
        }
    }

    pub fn matches(&self, status: &CampaignStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => *status == CampaignStatus::Active,
            StatusFilter::Paused => *status == CampaignStatus::Paused,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown status filter: {0}")]
pub struct ParseStatusFilterError(String);

impl FromStr for StatusFilter {
    type Err = ParseStatusFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(StatusFilter::All),
            "Active" => Ok(StatusFilter::Active),
            "Paused" => Ok(StatusFilter::Paused),
            other => Err(ParseStatusFilterError(other.to_string())),
        }
    }
}

/// Campaigns matching `filter`, in their original order.
pub fn filter_campaigns(campaigns: &[Campaign], filter: StatusFilter) -> Vec<Campaign> {
    campaigns
        .iter()
        .filter(|c| filter.matches(&c.status))
        .cloned()
        .collect()
}
