use serde::{Deserialize, Serialize};

/// Request payload for the pet help endpoint.
///
/// Every field is optional at the serde level so presence can be checked
/// explicitly: a coordinate of `0` is present, only an absent or null field
/// counts as missing.
#[derive(Debug, Deserialize)]
pub struct HelpRequest {
    pub question: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// Response payload for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HelpRequest {
    /// Returns the validated fields, or `None` when any of them is missing.
    /// An empty `question` counts as missing; zero coordinates are valid.
    pub fn fields(&self) -> Option<(&str, f64, f64)> {
        let question = self.question.as_deref().filter(|q| !q.is_empty())?;
        Some((question, self.lat?, self.lng?))
    }
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "pet help service is ready".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> HelpRequest {
        serde_json::from_str(raw).expect("payload should deserialize")
    }

    #[test]
    fn test_complete_request_yields_fields() {
        let request = parse(r#"{"question": "my dog is limping", "lat": 25.03, "lng": 121.56}"#);
        assert_eq!(request.fields(), Some(("my dog is limping", 25.03, 121.56)));
    }

    #[test]
    fn test_zero_coordinates_are_present() {
        let request = parse(r#"{"question": "my cat ate a lily", "lat": 0, "lng": 0}"#);
        assert_eq!(request.fields(), Some(("my cat ate a lily", 0.0, 0.0)));
    }

    #[test]
    fn test_empty_question_is_missing() {
        let request = parse(r#"{"question": "", "lat": 25.03, "lng": 121.56}"#);
        assert_eq!(request.fields(), None);
    }

    #[test]
    fn test_whitespace_question_is_accepted() {
        let request = parse(r#"{"question": " ", "lat": 25.03, "lng": 121.56}"#);
        assert_eq!(request.fields(), Some((" ", 25.03, 121.56)));
    }

    #[test]
    fn test_absent_fields_are_missing() {
        assert_eq!(parse("{}").fields(), None);
        assert_eq!(parse(r#"{"question": "help"}"#).fields(), None);
        assert_eq!(parse(r#"{"question": "help", "lat": 25.03}"#).fields(), None);
    }

    #[test]
    fn test_null_coordinate_is_missing() {
        let request = parse(r#"{"question": "help", "lat": null, "lng": 121.56}"#);
        assert_eq!(request.fields(), None);
    }

    #[test]
    fn test_integer_coordinates_deserialize() {
        let request = parse(r#"{"question": "help", "lat": 25, "lng": 121}"#);
        assert_eq!(request.fields(), Some(("help", 25.0, 121.0)));
    }
}
