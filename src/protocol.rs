//! Wire types for the consumption endpoint.
//!
//! The backend speaks Portuguese field names; `rename` attributes keep
//! the Rust side idiomatic without touching the wire format.

use serde::Deserialize;

/// Fallback when a non-2xx response has no usable error body.
pub const GENERIC_SERVER_ERROR: &str = "Erro no servidor";

/// One per-color entry of a successful response, in backend order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConsumptionItem {
    /// Category label (ink color name)
    #[serde(rename = "cor")]
    pub color: String,
    /// Ink mass for the category, in grams
    #[serde(rename = "massa_g")]
    pub mass_g: f64,
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConsumptionReport {
    /// Per-color breakdown, rendered in this order
    #[serde(rename = "consumo_por_cor_lista")]
    pub per_color: Vec<ConsumptionItem>,
    /// Aggregate over all entries, in grams
    #[serde(rename = "consumo_total_g")]
    pub total_g: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Parse a 2xx body into a report.
pub fn parse_report(body: &str) -> Result<ConsumptionReport, serde_json::Error> {
    serde_json::from_str(body)
}

/// Extract the server's message from a non-2xx body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|body| body.error)
        .unwrap_or_else(|_| GENERIC_SERVER_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_successful_report() {
        let body = r#"{
            "consumo_por_cor_lista": [
                {"cor": "Azul", "massa_g": 1.2345},
                {"cor": "Amarelo", "massa_g": 0.5}
            ],
            "consumo_total_g": 1.7345
        }"#;
        let report = parse_report(body).unwrap();
        assert_eq!(report.per_color.len(), 2);
        assert_eq!(report.per_color[0].color, "Azul");
        assert_eq!(report.per_color[0].mass_g, 1.2345);
        assert_eq!(report.total_g, 1.7345);
    }

    #[test]
    fn report_order_follows_the_body() {
        let body = r#"{
            "consumo_por_cor_lista": [
                {"cor": "Preto", "massa_g": 2.0},
                {"cor": "Ciano", "massa_g": 1.0}
            ],
            "consumo_total_g": 3.0
        }"#;
        let report = parse_report(body).unwrap();
        let order: Vec<&str> = report
            .per_color
            .iter()
            .map(|item| item.color.as_str())
            .collect();
        assert_eq!(order, ["Preto", "Ciano"]);
    }

    #[test]
    fn missing_fields_fail_to_parse() {
        assert!(parse_report(r#"{"consumo_total_g": 1.0}"#).is_err());
        assert!(parse_report("not json").is_err());
    }

    #[test]
    fn error_body_message_is_extracted() {
        assert_eq!(error_message(r#"{"error": "invalid file"}"#), "invalid file");
    }

    #[test]
    fn unusable_error_body_falls_back() {
        assert_eq!(error_message("<html>502</html>"), GENERIC_SERVER_ERROR);
        assert_eq!(error_message(""), GENERIC_SERVER_ERROR);
        assert_eq!(error_message(r#"{"detail": "nope"}"#), GENERIC_SERVER_ERROR);
    }
}
