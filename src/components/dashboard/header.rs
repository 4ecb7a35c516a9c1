use dioxus::prelude::*;
use crate::state::StatusFilter;

#[component]
pub fn DashboardHeader(selected: StatusFilter, on_select: EventHandler<StatusFilter>) -> Element {
    rsx! {
        header { class: "page__header animate-fade-in",
            div { class: "animate-slide-down", style: "animation-delay: 100ms",
                p { class: "eyebrow", "Campaign Analytics" }
                h1 { "Campaign Dashboard" }
                p { class: "subhead", "Clicks, spend and reach across your campaigns" }
            }

            // Status filter
            div { class: "filter animate-slide-down", style: "animation-delay: 200ms",
                label { r#for: "status", class: "filter__label", "Status" }
                select {
                    id: "status",
                    class: "filter__select filter__select--animated",
                    value: "{selected}",
                    onchange: move |e| {
                        match e.value().parse::<StatusFilter>() {
                            Ok(filter) => on_select.call(filter),
                            Err(err) => tracing::warn!("Ignoring status selection: {}", err),
                        }
                    },
                    for choice in StatusFilter::ALL {
                        option {
                            key: "{choice}",
                            value: "{choice}",
                            selected: choice == selected,
                            "{choice}"
                        }
                    }
                }
            }
        }
    }
}
