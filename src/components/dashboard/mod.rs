mod header;
mod summary;
mod table;

pub use header::*;
pub use summary::*;
pub use table::*;

use dioxus::prelude::*;
use tokio_util::sync::CancellationToken;

use crate::api::CampaignSourceHandle;
use crate::components::common::{Card, ErrorBadge, LoadingBadge};
use crate::state::{filter_campaigns, load_campaigns, LoaderState, StatusFilter, Totals};

/// The campaign analytics page: status filter, totals and campaign table.
///
/// Expects a `CampaignSourceHandle` in context.
#[component]
pub fn CampaignDashboard() -> Element {
    let source = use_context::<CampaignSourceHandle>();
    let mut loader = use_signal(LoaderState::default);
    let mut status_filter = use_signal(StatusFilter::default);

    // Lives as long as this mount
    let cancel = use_hook(CancellationToken::new);
    {
        let cancel = cancel.clone();
        use_drop(move || cancel.cancel());
    }

    // Exactly one fetch per mount
    use_hook(move || {
        spawn(async move {
            loader.write().begin();
            let outcome = load_campaigns(source.source(), &cancel).await;
            // Nothing is written once the view is gone
            if cancel.is_cancelled() {
                return;
            }
            loader.write().apply(outcome);
        })
    });

    let filtered = use_memo(move || filter_campaigns(&loader.read().campaigns, status_filter()));
    let totals = use_memo(move || Totals::from_campaigns(&filtered.read()));

    let state = loader.read();
    let show_empty = state.shows_empty_placeholder(filtered.read().len());

    rsx! {
        div { class: "page",
            DashboardHeader {
                selected: status_filter(),
                on_select: move |filter| status_filter.set(filter),
            }

            SummaryTiles { totals: totals() }

            Card { delay: "500ms",
                div { class: "card__header",
                    h2 { "Campaigns" }
                    if state.loading {
                        LoadingBadge {}
                    }
                    if let Some(err) = state.error.as_ref() {
                        ErrorBadge { message: err.clone() }
                    }
                }

                CampaignTable { campaigns: filtered(), show_empty: show_empty }
            }
        }
    }
}
