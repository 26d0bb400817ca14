use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::ClientConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ClientConfig::default());
    provide_context(AppGlobalContext::new());

    view! {
        <Shell />
    }
}
