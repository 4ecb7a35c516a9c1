use crate::models::Campaign;

/// Summary totals over a set of campaigns. Missing metrics count as zero
/// and counts saturate at `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub clicks: i64,
    pub cost: f64,
    pub impressions: i64,
}

impl Totals {
    pub fn from_campaigns(campaigns: &[Campaign]) -> Self {
        campaigns.iter().fold(Totals::default(), |acc, c| Totals {
            clicks: acc.clicks.saturating_add(c.clicks.unwrap_or(0)),
            cost: acc.cost + c.cost.unwrap_or(0.0),
            impressions: acc.impressions.saturating_add(c.impressions.unwrap_or(0)),
        })
    }
}
