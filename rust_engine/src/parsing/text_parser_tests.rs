#[cfg(test)]
mod tests {
    use crate::models::MissionSource;
    use crate::parsing::text_parser::parse_text;

    /// Basic two-column table; the textual header row drops out naturally
    #[test]
    fn test_parse_text_basic() {
        let text = "time flux\n1.0 0.99\n2.0 1.01\n3.0 1.00\n";
        let curve = parse_text(text);

        assert_eq!(curve.len(), 3);
        assert_eq!(curve.time(), &[1.0, 2.0, 3.0]);
        assert!(curve.error().is_none());
        assert_eq!(curve.metadata.source, MissionSource::Unknown);
    }

    /// Runs of mixed whitespace are one separator
    #[test]
    fn test_parse_text_whitespace_runs() {
        let text = "1.0\t\t0.99\n2.0   1.01\n";
        let curve = parse_text(text);
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.flux(), &[0.99, 1.01]);
    }

    /// Third token is the uncertainty column
    #[test]
    fn test_parse_text_error_column() {
        let text = "1.0 0.99 0.01\n2.0 1.01 0.02\n";
        let curve = parse_text(text);
        assert_eq!(curve.error(), Some([0.01, 0.02].as_slice()));
    }

    /// Unparseable uncertainty tokens degrade to 0.0
    #[test]
    fn test_parse_text_error_substitution() {
        let text = "1.0 0.99 bad\n2.0 1.01 0.02\n";
        let curve = parse_text(text);
        assert_eq!(curve.error(), Some([0.0, 0.02].as_slice()));
    }

    /// Rows with fewer than two tokens are skipped
    #[test]
    fn test_parse_text_short_rows() {
        let text = "1.0\n2.0 1.01\n";
        let curve = parse_text(text);
        assert_eq!(curve.len(), 1);
    }

    /// Comment and blank lines are skipped
    #[test]
    fn test_parse_text_comments() {
        let text = "# cadence 0.02\n% extra\n\n1.0 1.0\n";
        let curve = parse_text(text);
        assert_eq!(curve.len(), 1);
    }

    /// Degenerate input yields an empty curve, not the placeholder series
    #[test]
    fn test_parse_text_no_fallback() {
        let curve = parse_text("only words here\n");
        assert!(curve.is_empty());
        assert_eq!(curve.metadata.source, MissionSource::Unknown);

        let empty = parse_text("");
        assert!(empty.is_empty());
    }

    /// Catalog ids are still scanned out of comment lines
    #[test]
    fn test_parse_text_target_id() {
        let text = "# TIC 307210830\n1.0 1.0\n2.0 1.0\n";
        let curve = parse_text(text);
        assert_eq!(curve.metadata.target_id.as_deref(), Some("307210830"));
    }
}
