#[cfg(test)]
mod tests {
    use crate::error::EngineError;
    use crate::models::MissionSource;
    use crate::parsing::json_parser::parse_json_str;

    #[test]
    fn test_parse_json_basic() {
        let json = r#"{"time": [1.0, 2.0], "flux": [0.99, 1.01], "error": [0.01, 0.02]}"#;
        let curve = parse_json_str(json).unwrap();

        assert_eq!(curve.time(), &[1.0, 2.0]);
        assert_eq!(curve.flux(), &[0.99, 1.01]);
        assert_eq!(curve.error(), Some([0.01, 0.02].as_slice()));
    }

    #[test]
    fn test_parse_json_candidate_keys() {
        let json = r#"{"bjd": [1.0, 2.0], "brightness": [1.0, 1.0]}"#;
        let curve = parse_json_str(json).unwrap();
        assert_eq!(curve.len(), 2);
        assert!(curve.error().is_none());
    }

    #[test]
    fn test_parse_json_mismatched_error_dropped() {
        let json = r#"{"time": [1.0, 2.0], "flux": [1.0, 1.0], "error": [0.01]}"#;
        let curve = parse_json_str(json).unwrap();
        assert!(curve.error().is_none());
    }

    #[test]
    fn test_parse_json_missing_columns() {
        let result = parse_json_str(r#"{"time": [1.0, 2.0]}"#);
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_json_non_numeric_array_rejected() {
        let result = parse_json_str(r#"{"time": [1.0, "x"], "flux": [1.0, 1.0]}"#);
        assert!(matches!(result, Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_json_malformed_payload() {
        assert!(matches!(
            parse_json_str("not json"),
            Err(EngineError::Json(_))
        ));
        assert!(matches!(
            parse_json_str("[1, 2, 3]"),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_json_length_mismatch_propagates() {
        let result = parse_json_str(r#"{"time": [1.0, 2.0], "flux": [1.0]}"#);
        assert!(matches!(result, Err(EngineError::LengthMismatch { .. })));
    }

    #[test]
    fn test_parse_json_provenance() {
        let json = r#"{"mission": "tess", "target": "TIC 307210830",
                       "time": [1.0, 2.0], "flux": [1.0, 1.0]}"#;
        let curve = parse_json_str(json).unwrap();
        assert_eq!(curve.metadata.source, MissionSource::Tess);
        assert_eq!(curve.metadata.target_id.as_deref(), Some("307210830"));
    }
}
