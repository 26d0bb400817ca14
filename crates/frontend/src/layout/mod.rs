pub mod global_context;
pub mod top_header;

use crate::domain::a001_model::ui::list::ModelList;
use crate::domain::a002_experiment::ui::list::ExperimentList;
use global_context::{AppGlobalContext, Section};
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  [lab]  Models  Experiments    TopHeader |
/// +------------------------------------------+
/// |        list view of the active section   |
/// +------------------------------------------+
/// ```
///
/// Only the active section's view is mounted. Switching sections unmounts
/// the previous view and mounts a fresh one, which fetches again.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">
                <div class="segment">
                    {move || section_view(ctx.active.get())}
                </div>
            </main>
        </div>
    }
}

/// The single list view mounted for a section.
fn section_view(section: Section) -> AnyView {
    match section {
        Section::Models => view! { <ModelList /> }.into_any(),
        Section::Experiments => view! { <ExperimentList /> }.into_any(),
    }
}
