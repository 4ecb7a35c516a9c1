use dioxus::prelude::*;
use crate::components::common::Badge;
use crate::components::format::{cost_cell, count_cell, row_delay};
use crate::models::Campaign;

#[component]
pub fn CampaignTable(campaigns: Vec<Campaign>, show_empty: bool) -> Element {
    rsx! {
        div { class: "table__wrapper",
            table { class: "table",
                thead {
                    tr {
                        th { "Campaign Name" }
                        th { "Status" }
                        th { "Clicks" }
                        th { "Cost" }
                        th { "Impressions" }
                    }
                }
                tbody {
                    for (index, campaign) in campaigns.iter().enumerate() {
                        CampaignRow {
                            key: "{campaign.id}",
                            campaign: campaign.clone(),
                            index: index,
                        }
                    }
                    if show_empty {
                        tr {
                            td { colspan: "5", class: "empty-state",
                                "No campaigns match this filter."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CampaignRow(campaign: Campaign, index: usize) -> Element {
    let delay = row_delay(index);
    let clicks = count_cell(campaign.clicks);
    let cost = cost_cell(campaign.cost);
    let impressions = count_cell(campaign.impressions);

    rsx! {
        tr { class: "table__row animate-slide-up", style: "animation-delay: {delay}",
            td {
                div { class: "campaign-name", "{campaign.name}" }
                div { class: "campaign-id", "ID: {campaign.id}" }
            }
            td {
                Badge {
                    text: campaign.status.display_name().to_string(),
                    class: campaign.status.badge_class().to_string(),
                }
            }
            td { "{clicks}" }
            td { "{cost}" }
            td { "{impressions}" }
        }
    }
}
