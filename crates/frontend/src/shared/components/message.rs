use crate::shared::collection::RowSummary;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

pub const REMEDIATION_HINT: &str = "Ensure that server is alive and running.";

/// Negative message shown when the fetch failed
#[component]
pub fn ErrorPanel(
    /// Failure description
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            <MessageBarBody>
                <MessageBarTitle>{message}</MessageBarTitle>
                <p>{REMEDIATION_HINT}</p>
            </MessageBarBody>
        </MessageBar>
    }
}

/// Skeleton shown while the request is in flight
#[component]
pub fn Placeholder() -> impl IntoView {
    view! {
        <div class="placeholder" aria-busy="true">
            <Skeleton>
                <SkeletonItem />
                <SkeletonItem />
            </Skeleton>
        </div>
    }
}

#[component]
pub fn EmptyPanel(
    title: &'static str,
    /// Completes the documentation sentence
    hint: &'static str,
    #[prop(into)]
    docs_url: String,
) -> impl IntoView {
    view! {
        <MessageBar>
            <MessageBarBody>
                <div class="message__icon">{icon("search")}</div>
                <MessageBarTitle>{title}</MessageBarTitle>
                "Refer to the TensorCraft "
                <a href=docs_url>"documentation"</a>
                " to get instruction "
                {hint}
            </MessageBarBody>
        </MessageBar>
    }
}

/// Divided group with one item per row
#[component]
pub fn ItemGroup(rows: Vec<RowSummary>) -> impl IntoView {
    view! {
        <div class="item-group item-group--divided">
            {rows.into_iter().map(|row| view! {
                <div class="item">
                    <div class="item__content">
                        <a class="item__header">{row.name}</a>
                        <div class="item__extra">
                            {row.details.into_iter().map(|detail| view! {
                                <span class="item__detail">
                                    {detail.icon.map(icon)}
                                    <span>{detail.text}</span>
                                </span>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}
