use super::CollectionItem;
use crate::shared::api_error::FetchError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Classify a completed response.
///
/// Non-2xx statuses fail without looking at the body. A 2xx body must be a
/// JSON array; its items are returned verbatim and in order.
pub fn decode_collection<T: DeserializeOwned>(status: u16, body: &str) -> Result<Vec<T>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    serde_json::from_str::<Vec<T>>(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch the whole collection of `T` with one GET request.
pub async fn fetch_collection<T: CollectionItem>(api_base: &str) -> Result<Vec<T>, FetchError> {
    let url = format!("{}{}", api_base, T::ENDPOINT);
    log::debug!("fetching {} from {}", T::NOUN, url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    decode_collection(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_model::aggregate::Model;
    use contracts::domain::a002_experiment::aggregate::Experiment;

    #[test]
    fn test_decode_models() {
        let body = r#"[
            {"name":"mlp_3","tag":"0.0.1","created_at":1573636383},
            {"name":"mlp_3","tag":"0.0.2","created_at":1573637383},
            {"name":"mlp_3","tag":"1.2.1","created_at":1573638383}
        ]"#;
        let models: Vec<Model> = decode_collection(200, body).unwrap();
        assert_eq!(models.len(), 3);
        let tags: Vec<&str> = models.iter().map(|m| m.tag.as_str()).collect();
        assert_eq!(tags, ["0.0.1", "0.0.2", "1.2.1"]);
    }

    #[test]
    fn test_decode_empty_array() {
        let experiments: Vec<Experiment> = decode_collection(200, "[]").unwrap();
        assert!(experiments.is_empty());
    }

    #[test]
    fn test_non_success_status() {
        let result = decode_collection::<Model>(503, "[]");
        assert_eq!(result, Err(FetchError::Status(503)));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            decode_collection::<Model>(200, "<html>"),
            Err(FetchError::Decode(_))
        ));
        // an object is not a collection
        assert!(matches!(
            decode_collection::<Model>(200, r#"{"name":"x"}"#),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            decode_collection::<Model>(200, "[1, 2]"),
            Err(FetchError::Decode(_))
        ));
    }
}
