//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - assembled fresh on every submission (no identity beyond one request)
//! - sent as JSON to the backend without an intermediate mapping layer

use serde::{Deserialize, Serialize};

/// One metric (income, expense, or yield) across three consecutive months.
///
/// Entries may be negative, zero, or NaN; the derivation core carries
/// anomalies through rather than rejecting them.
pub type MonthlySeries = [f64; 3];

/// Per-series dispersion statistics.
///
/// `stability` is the coefficient of variation: `sqrt(variance) / mean`.
/// It is non-finite when `mean == 0`; that value is forwarded to the
/// scoring service unmodified rather than guarded against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityStats {
    pub mean: f64,
    /// Population variance (divide by N, not N-1).
    pub variance: f64,
    pub stability: f64,
}

/// The flat feature vector the external credit-scoring model accepts.
///
/// Field names are part of the wire contract and must not be renamed.
/// Sent as a single-element array; see [`crate::api`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CreditFeatureRecord {
    pub income_stability: f64,
    pub income_mean: f64,
    pub expense_stability: f64,
    pub expense_mean: f64,
    /// Raw population variance of the yield series, not a CV ratio.
    /// The model was trained on variance here; keep the asymmetry.
    pub yield_consistency: f64,
    pub community_engagement: i64,
}

/// Raw fertilizer form fields, forwarded to the backend unchanged.
///
/// `farm_size_acres` stays a string: the backend owns parsing, and the
/// original form submits whatever the farmer typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FertilizerQuery {
    pub area_name: String,
    pub crop_type: String,
    pub farm_size_acres: String,
}

/// Reply shape of the question-answering endpoint.
///
/// The backend returns `{answer}` on success or `{error}` on failure;
/// both fields are optional so either shape deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AskReply {
    pub answer: Option<String>,
    pub error: Option<String>,
}

impl AskReply {
    /// The line shown in the chat transcript: the answer if present,
    /// otherwise the backend's error text, otherwise a generic fallback.
    pub fn display_text(&self) -> &str {
        self.answer
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("Failed to get response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_record_serializes_with_contract_field_names() {
        let record = CreditFeatureRecord {
            income_stability: 0.1,
            income_mean: 100.0,
            expense_stability: 0.2,
            expense_mean: 50.0,
            yield_consistency: 0.0,
            community_engagement: 4,
        };
        let json = serde_json::to_value(record).unwrap();
        let obj = json.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "income_stability",
                "income_mean",
                "expense_stability",
                "expense_mean",
                "yield_consistency",
                "community_engagement"
            ]
        );
        assert_eq!(obj["community_engagement"], 4);
    }

    #[test]
    fn non_finite_features_serialize_as_null() {
        // Matches the original frontend: JSON.stringify turns NaN/Infinity
        // into null, and serde_json does the same for non-finite floats.
        let record = CreditFeatureRecord {
            income_stability: f64::INFINITY,
            income_mean: 0.0,
            expense_stability: f64::NAN,
            expense_mean: 0.0,
            yield_consistency: 1.0,
            community_engagement: 0,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"income_stability\":null"));
        assert!(json.contains("\"expense_stability\":null"));
        assert!(json.contains("\"yield_consistency\":1.0"));
    }

    #[test]
    fn ask_reply_accepts_both_shapes() {
        let ok: AskReply = serde_json::from_str(r#"{"answer":"Plant maize."}"#).unwrap();
        assert_eq!(ok.display_text(), "Plant maize.");

        let err: AskReply = serde_json::from_str(r#"{"error":"model offline"}"#).unwrap();
        assert_eq!(err.display_text(), "model offline");

        let empty: AskReply = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.display_text(), "Failed to get response");
    }
}
