//! Terminal output formatting.
//!
//! We keep formatting code in one place so:
//! - the derivation/transport code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use serde_json::Value;

use crate::domain::CreditFeatureRecord;

/// Format the derived feature record the way it goes on the wire.
///
/// Shown before submission so the farmer (or a script) can see exactly what
/// the scoring model receives. Non-finite values print as-is (`NaN`, `inf`);
/// on the wire they become JSON `null`.
pub fn format_feature_record(record: &CreditFeatureRecord) -> String {
    let mut out = String::new();

    out.push_str("=== Derived credit features ===\n");
    out.push_str(&format!(
        "income   : mean={} stability={}\n",
        fmt_num(record.income_mean),
        fmt_num(record.income_stability)
    ));
    out.push_str(&format!(
        "expenses : mean={} stability={}\n",
        fmt_num(record.expense_mean),
        fmt_num(record.expense_stability)
    ));
    out.push_str(&format!(
        "yield    : consistency={}\n",
        fmt_num(record.yield_consistency)
    ));
    out.push_str(&format!(
        "community engagement: {}\n",
        record.community_engagement
    ));

    out
}

/// Render a backend response verbatim, pretty-printed.
pub fn format_response(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// One transcript line of the chat session.
pub fn format_chat_line(speaker: &str, text: &str) -> String {
    format!("{speaker}: {text}")
}

fn fmt_num(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.4}")
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::build_feature_record;

    #[test]
    fn feature_record_summary_shows_all_fields() {
        let record = build_feature_record(
            &[100.0, 110.0, 90.0],
            &[50.0, 55.0, 45.0],
            &[5.0, 5.0, 5.0],
            "Often",
        );
        let out = format_feature_record(&record);
        assert!(out.contains("income   : mean=100.0000"));
        assert!(out.contains("yield    : consistency=0.0000"));
        assert!(out.contains("community engagement: 8"));
    }

    #[test]
    fn non_finite_features_are_printed_not_hidden() {
        let record = build_feature_record(
            &[-5.0, 0.0, 5.0],
            &[50.0, 55.0, 45.0],
            &[5.0, 5.0, 5.0],
            "Never",
        );
        let out = format_feature_record(&record);
        assert!(out.contains("stability=inf"));
    }

    #[test]
    fn responses_render_verbatim() {
        let value: Value =
            serde_json::from_str(r#"{"credit_score": 712, "band": "fair"}"#).unwrap();
        let out = format_response(&value);
        assert!(out.contains("\"credit_score\": 712"));
        assert!(out.contains("\"band\": \"fair\""));
    }

    #[test]
    fn chat_lines_carry_the_speaker() {
        assert_eq!(format_chat_line("Me", "hello"), "Me: hello");
        assert_eq!(format_chat_line("FarmAI", "hi"), "FarmAI: hi");
    }
}
