use crate::shared::collection::{CollectionItem, RowDetail, RowSummary};
use crate::shared::components::collection_list::collection_list;
use crate::shared::config::ClientConfig;
use contracts::domain::a002_experiment::aggregate::Experiment;
use leptos::prelude::*;

impl CollectionItem for Experiment {
    const ENDPOINT: &'static str = "/experiments";
    const NOUN: &'static str = "experiments";
    const EMPTY_TITLE: &'static str = "There are no experiments yet.";
    const EMPTY_HINT: &'static str = "how to setup experiment.";

    fn row(&self, _config: &ClientConfig) -> RowSummary {
        RowSummary {
            name: self.name.clone(),
            details: vec![RowDetail::with_icon("sync", self.epoch_count().to_string())],
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ExperimentList() -> impl IntoView {
    collection_list::<Experiment>()
}
