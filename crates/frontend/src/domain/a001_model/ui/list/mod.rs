use crate::shared::collection::{CollectionItem, RowDetail, RowSummary};
use crate::shared::components::collection_list::collection_list;
use crate::shared::config::ClientConfig;
use crate::shared::date_utils::format_datetime_utc;
use contracts::domain::a001_model::aggregate::Model;
use leptos::prelude::*;

impl CollectionItem for Model {
    const ENDPOINT: &'static str = "/models";
    const NOUN: &'static str = "models";
    const EMPTY_TITLE: &'static str = "There are no uploaded models yet.";
    const EMPTY_HINT: &'static str = "how to upload model.";

    fn row(&self, config: &ClientConfig) -> RowSummary {
        let created_on = self
            .created_at_utc()
            .and_then(|dt| format_datetime_utc(dt, &config.date_format))
            .unwrap_or_else(|| "-".to_string());

        RowSummary {
            name: self.name.clone(),
            details: vec![
                RowDetail::with_icon("tag", self.tag.clone()),
                RowDetail::text(format!("Created on {}", created_on)),
            ],
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ModelList() -> impl IntoView {
    collection_list::<Model>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collection::decode_collection;
    use crate::shared::fetch_state::{FetchEvent, Panel, ViewState};

    #[test]
    fn test_single_model_row() {
        let body = r#"[{"name":"resnet50","tag":"v1","created_at":1600000000}]"#;
        let models: Vec<Model> = decode_collection(200, body).unwrap();
        let state = ViewState::Loading.apply(FetchEvent::Succeeded(models));
        assert_eq!(state.panel(), Panel::Rows(1));

        let row = state.items()[0].row(&ClientConfig::default());
        assert_eq!(row.name, "resnet50");
        assert_eq!(row.details[0], RowDetail::with_icon("tag", "v1"));
        assert_eq!(row.details[1], RowDetail::text("Created on Sep 13, 2020"));
    }

    #[test]
    fn test_created_at_zero() {
        let row = Model::new("m", "t", 0.0).row(&ClientConfig::default());
        assert_eq!(row.details[1].text, "Created on Jan 1, 1970");
    }

    #[test]
    fn test_custom_date_format() {
        let config = ClientConfig {
            date_format: "%Y-%m-%d".to_string(),
            ..ClientConfig::default()
        };
        let row = Model::new("m", "t", 1_600_000_000.0).row(&config);
        assert_eq!(row.details[1].text, "Created on 2020-09-13");
    }

    #[test]
    fn test_unrepresentable_date() {
        let row = Model::new("m", "t", 1e300).row(&ClientConfig::default());
        assert_eq!(row.details[1].text, "Created on -");
    }

    #[test]
    fn test_row_count_matches_payload() {
        let body = r#"[
            {"name":"a","tag":"1","created_at":1},
            {"name":"b","tag":"2","created_at":2},
            {"name":"c","tag":"3","created_at":3},
            {"name":"a","tag":"1","created_at":1}
        ]"#;
        let models: Vec<Model> = decode_collection(200, body).unwrap();
        let config = ClientConfig::default();
        let state = ViewState::Loading.apply(FetchEvent::Succeeded(models));
        let rows: Vec<RowSummary> = state.items().iter().map(|m| m.row(&config)).collect();
        assert_eq!(state.panel(), Panel::Rows(4));
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].name, "a");
    }
}
