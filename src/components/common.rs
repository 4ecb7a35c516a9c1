use dioxus::prelude::*;

#[component]
pub fn LoadingBadge() -> Element {
    rsx! {
        span { class: "badge badge--muted animate-pulse", "Loading..." }
    }
}

#[component]
pub fn ErrorBadge(message: String) -> Element {
    rsx! {
        span { class: "badge badge--error animate-shake", "{message}" }
    }
}

#[component]
pub fn Badge(text: String, class: String) -> Element {
    rsx! {
        span { class: "{class}", "{text}" }
    }
}

#[component]
pub fn Card(children: Element, #[props(default = "0ms".to_string())] delay: String) -> Element {
    rsx! {
        section {
            class: "card animate-fade-in",
            style: "animation-delay: {delay}",
            {children}
        }
    }
}

/// One summary figure, e.g. total clicks.
#[component]
pub fn SummaryTile(label: String, value: String, delay: String) -> Element {
    rsx! {
        div {
            class: "summary__tile animate-scale-up",
            style: "animation-delay: {delay}",
            p { class: "summary__label", "{label}" }
            p { class: "summary__value", "{value}" }
        }
    }
}
