//! Blocking JSON client for the three backend endpoints.
//!
//! The prediction and recommendation responses are treated as opaque JSON
//! and rendered verbatim; only the `/ask` reply has a known shape.

use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

use crate::domain::{AskReply, CreditFeatureRecord, FertilizerQuery};
use crate::error::AppError;

/// Base URL used when `FARM_API_URL` is not set.
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the environment (`.env` supported).
    ///
    /// `FARM_API_URL` overrides the default local backend address; a
    /// trailing slash is tolerated.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url = std::env::var("FARM_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Submit a derived feature record to the scoring model.
    ///
    /// The endpoint expects a batch, so the single record is wrapped in a
    /// one-element array. The response is whatever JSON the model returns.
    pub fn predict_credit_score(&self, record: &CreditFeatureRecord) -> Result<Value, AppError> {
        self.post_json("predict", &[*record])
    }

    /// Forward raw fertilizer form fields and return the recommendation JSON.
    pub fn fertilizer_recommendation(&self, query: &FertilizerQuery) -> Result<Value, AppError> {
        self.post_json("fertilizer_recommendation", query)
    }

    /// Ask FarmAI a question.
    pub fn ask(&self, question: &str) -> Result<AskReply, AppError> {
        #[derive(Serialize)]
        struct AskBody<'a> {
            question: &'a str,
        }

        let value = self.post_json("ask", &AskBody { question })?;
        serde_json::from_value(value)
            .map_err(|e| AppError::backend(format!("Unexpected /ask reply shape: {e}")))
    }

    fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Value, AppError> {
        let url = format!("{}/{}", self.base_url, path);

        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| AppError::backend(format!("Request to /{path} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::backend(
                format!("/{path} returned status {}.", resp.status()),
            ));
        }

        resp.json()
            .map_err(|e| AppError::backend(format!("Failed to parse /{path} response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::build_feature_record;

    #[test]
    fn predict_payload_is_a_single_element_array() {
        // The wire shape is fixed by the backend contract: a batch array
        // holding exactly one record.
        let record = build_feature_record(
            &[100.0, 110.0, 90.0],
            &[50.0, 55.0, 45.0],
            &[5.0, 5.0, 5.0],
            "Sometimes",
        );
        let payload = serde_json::to_value([record]).unwrap();
        let arr = payload.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert!(arr[0].get("income_stability").is_some());
        assert_eq!(arr[0]["community_engagement"], 4);
    }

    #[test]
    fn fertilizer_query_forwards_fields_verbatim() {
        let query = FertilizerQuery {
            area_name: "Kilimanjaro".to_string(),
            crop_type: "maize".to_string(),
            farm_size_acres: "12.5".to_string(),
        };
        let payload = serde_json::to_value(&query).unwrap();
        assert_eq!(payload["area_name"], "Kilimanjaro");
        assert_eq!(payload["crop_type"], "maize");
        // Farm size is forwarded as the raw string the user typed.
        assert_eq!(payload["farm_size_acres"], "12.5");
    }
}
