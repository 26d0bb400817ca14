//! Generic list view.
//!
//! Owns one fetch lifecycle: starts in `Loading`, issues a single request on
//! mount and settles once. Nothing is retried; a new request happens only
//! when the view is mounted again.

use crate::shared::collection::{fetch_collection, CollectionItem, RowSummary};
use crate::shared::components::message::{EmptyPanel, ErrorPanel, ItemGroup, Placeholder};
use crate::shared::config::{use_config, ClientConfig};
use crate::shared::fetch_state::{FetchEvent, Panel, ViewState};
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// What the list shows, derived from its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    Error(String),
    Placeholder,
    Empty {
        title: &'static str,
        hint: &'static str,
        docs_url: String,
    },
    Rows(Vec<RowSummary>),
}

impl ListContent {
    pub fn from_state<T: CollectionItem>(state: &ViewState<T>, config: &ClientConfig) -> Self {
        match state.panel() {
            Panel::Error => ListContent::Error(state.error_message().unwrap_or_default().to_string()),
            Panel::Placeholder => ListContent::Placeholder,
            Panel::Empty => ListContent::Empty {
                title: T::EMPTY_TITLE,
                hint: T::EMPTY_HINT,
                docs_url: config.docs_url.clone(),
            },
            Panel::Rows(_) => {
                ListContent::Rows(state.items().iter().map(|item| item.row(config)).collect())
            }
        }
    }

    pub fn into_view(self) -> AnyView {
        match self {
            ListContent::Error(message) => view! { <ErrorPanel message=message /> }.into_any(),
            ListContent::Placeholder => view! { <Placeholder /> }.into_any(),
            ListContent::Empty { title, hint, docs_url } => {
                view! { <EmptyPanel title=title hint=hint docs_url=docs_url /> }.into_any()
            }
            ListContent::Rows(rows) => view! { <ItemGroup rows=rows /> }.into_any(),
        }
    }
}

/// Tracks whether the view that started a request is still mounted.
/// Clones share the flag.
#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Apply a fetch completion while mounted. Returns `false` and leaves the
    /// state untouched once released.
    pub fn deliver<T>(&self, state: &mut ViewState<T>, event: FetchEvent<T>) -> bool {
        if !self.is_mounted() {
            return false;
        }
        *state = std::mem::take(state).apply(event);
        true
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

pub fn collection_list<T: CollectionItem>() -> impl IntoView {
    let config = use_config();
    let state = RwSignal::new(ViewState::<T>::Loading);

    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });

    let api_base = config.api_base();
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_collection::<T>(&api_base).await;

        match &result {
            Ok(items) => log::info!("loaded {} {}", items.len(), T::NOUN),
            Err(e) => log::error!("failed to load {}: {}", T::NOUN, e),
        }

        if !guard.is_mounted() {
            log::debug!("{} view unmounted, response discarded", T::NOUN);
            return;
        }
        state.try_update(|s| guard.deliver(s, FetchEvent::from(result)));
    });

    move || state.with(|s| ListContent::from_state(s, &config)).into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_error::FetchError;
    use crate::shared::collection::{decode_collection, RowDetail};
    use contracts::domain::a001_model::aggregate::Model;
    use contracts::domain::a002_experiment::aggregate::Experiment;

    #[test]
    fn test_loading_renders_placeholder() {
        let state = ViewState::<Model>::Loading;
        assert_eq!(
            ListContent::from_state(&state, &ClientConfig::default()),
            ListContent::Placeholder
        );
    }

    #[test]
    fn test_error_renders_message_only() {
        let state = ViewState::<Model>::Loading
            .apply(FetchEvent::Failed(FetchError::Network("connection refused".into())));
        assert_eq!(
            ListContent::from_state(&state, &ClientConfig::default()),
            ListContent::Error("connection refused".to_string())
        );
    }

    #[test]
    fn test_empty_collection_renders_empty_panel() {
        let experiments: Vec<Experiment> = decode_collection(200, "[]").unwrap();
        let state = ViewState::Loading.apply(FetchEvent::Succeeded(experiments));
        assert_eq!(
            ListContent::from_state(&state, &ClientConfig::default()),
            ListContent::Empty {
                title: "There are no experiments yet.",
                hint: "how to setup experiment.",
                docs_url: "/".to_string(),
            }
        );
    }

    #[test]
    fn test_rows_follow_payload() {
        let body = r#"[
            {"name":"resnet50","tag":"v1","created_at":1600000000},
            {"name":"mlp_3","tag":null,"created_at":1573636383.512}
        ]"#;
        let models: Vec<Model> = decode_collection(200, body).unwrap();
        let state = ViewState::Loading.apply(FetchEvent::Succeeded(models));

        let rows = match ListContent::from_state(&state, &ClientConfig::default()) {
            ListContent::Rows(rows) => rows,
            other => panic!("expected rows, got {:?}", other),
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "resnet50");
        assert_eq!(rows[0].details[1], RowDetail::text("Created on Sep 13, 2020"));
        assert_eq!(rows[1].details[0], RowDetail::with_icon("tag", ""));
        assert_eq!(rows[1].details[1], RowDetail::text("Created on Nov 13, 2019"));
    }

    #[test]
    fn test_guard_delivers_while_mounted() {
        let guard = MountGuard::new();
        let mut state = ViewState::<Model>::Loading;
        assert!(guard.deliver(&mut state, FetchEvent::Succeeded(vec![Model::default()])));
        assert_eq!(state.panel(), Panel::Rows(1));
    }

    #[test]
    fn test_guard_discards_after_release() {
        let guard = MountGuard::new();
        let cleanup = guard.clone();
        cleanup.release();

        let mut state = ViewState::<Model>::Loading;
        assert!(!guard.is_mounted());
        assert!(!guard.deliver(&mut state, FetchEvent::Failed(FetchError::Status(500))));
        assert_eq!(state, ViewState::Loading);
    }
}
