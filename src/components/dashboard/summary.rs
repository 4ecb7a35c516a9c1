use dioxus::prelude::*;
use crate::components::common::SummaryTile;
use crate::components::format::{format_cost, format_count};
use crate::state::Totals;

#[component]
pub fn SummaryTiles(totals: Totals) -> Element {
    rsx! {
        section { class: "summary animate-fade-in", style: "animation-delay: 300ms",
            SummaryTile {
                label: "Clicks",
                value: format_count(totals.clicks),
                delay: "350ms",
            }
            SummaryTile {
                label: "Cost",
                value: format_cost(totals.cost),
                delay: "400ms",
            }
            SummaryTile {
                label: "Impressions",
                value: format_count(totals.impressions),
                delay: "450ms",
            }
        }
    }
}
