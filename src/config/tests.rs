//! Config Module Tests
//!
//! Validates job-file parsing: the happy path, each malformed-field rejection,
//! and serialization of the parsed spec.

#[cfg(test)]
mod tests {
    use crate::config::JobSpec;
    use crate::error::ConfigError;

    fn sample_job() -> &'static str {
        "4\n3\n2\nfederated machine learning\nabstract_1.txt\nabstract_2.txt\nabstract_3.txt\n"
    }

    // ============================================================
    // PARSING - happy path
    // ============================================================

    #[test]
    fn test_parse_valid_job() {
        let spec = JobSpec::parse(sample_job()).expect("sample job should parse");

        assert_eq!(spec.workers, 4);
        assert_eq!(spec.documents.len(), 3);
        assert_eq!(spec.top_k, 2);
        assert_eq!(spec.query, "federated machine learning");
        assert_eq!(spec.documents[0], "abstract_1.txt");
        assert_eq!(spec.documents[2], "abstract_3.txt");
    }

    #[test]
    fn test_parse_query_keeps_spaces() {
        let spec = JobSpec::parse("1\n1\n1\n  padded   query  \ndoc.txt\n").unwrap();

        // Only a trailing carriage return is stripped, the query line is
        // otherwise verbatim
        assert_eq!(spec.query, "  padded   query  ");
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let spec = JobSpec::parse("2\r\n1\r\n1\r\nrust\r\ndoc.txt\r\n").unwrap();

        assert_eq!(spec.workers, 2);
        assert_eq!(spec.query, "rust");
        assert_eq!(spec.documents, vec!["doc.txt".to_string()]);
    }

    #[test]
    fn test_parse_more_workers_than_documents() {
        // Legal: the pool handles worker count > document count
        let spec = JobSpec::parse("10\n1\n1\nquery\ndoc.txt\n").unwrap();

        assert_eq!(spec.workers, 10);
        assert_eq!(spec.documents.len(), 1);
    }

    // ============================================================
    // PARSING - rejections
    // ============================================================

    #[test]
    fn test_parse_rejects_non_numeric_worker_count() {
        let err = JobSpec::parse("four\n1\n1\nquery\ndoc.txt\n").unwrap_err();

        match err {
            ConfigError::Malformed { line, got, .. } => {
                assert_eq!(line, 1);
                assert_eq!(got, "four");
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_zero_workers() {
        let err = JobSpec::parse("0\n1\n1\nquery\ndoc.txt\n").unwrap_err();
        assert!(matches!(err, ConfigError::NoWorkers));
    }

    #[test]
    fn test_parse_rejects_zero_results() {
        let err = JobSpec::parse("1\n1\n0\nquery\ndoc.txt\n").unwrap_err();
        assert!(matches!(err, ConfigError::NoResults));
    }

    #[test]
    fn test_parse_rejects_document_count_mismatch() {
        let err = JobSpec::parse("1\n3\n1\nquery\ndoc.txt\n").unwrap_err();

        match err {
            ConfigError::DocumentCountMismatch { declared, found } => {
                assert_eq!(declared, 3);
                assert_eq!(found, 1);
            }
            other => panic!("expected DocumentCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(JobSpec::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_missing_query_line() {
        let err = JobSpec::parse("1\n1\n1\n").unwrap_err();

        match err {
            ConfigError::Malformed { line, expected, .. } => {
                assert_eq!(line, 4);
                assert_eq!(expected, "query line");
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    // ============================================================
    // SERIALIZATION
    // ============================================================

    #[test]
    fn test_job_spec_serialization() {
        let spec = JobSpec::parse(sample_job()).unwrap();

        let json = serde_json::to_string(&spec).expect("Serialization failed");
        let restored: JobSpec = serde_json::from_str(&json).expect("Deserialization failed");

        assert_eq!(restored, spec);
    }
}
