// Raw Configuration Source (JSON)
//
// Parsing only. The caller invokes `init_defaults` exactly once on the
// result before startup; the loader never defaults on its own.

use std::fs;
use std::path::Path;

use crate::domain::BrokerConfig;
use crate::error::Result;

/// Parse a broker config from a JSON document.
///
/// Absent fields decode to their zero values and are filled later by
/// the defaulting pass.
pub fn load_from_str(raw: &str) -> Result<BrokerConfig> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and parse a broker config from a JSON file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<BrokerConfig> {
    let raw = fs::read_to_string(path)?;
    load_from_str(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_absent_fields_decode_to_zero_values() {
        let config = load_from_str("{}").unwrap();

        assert_eq!(config.num_pollers, 0);
        assert_eq!(config.pipeline_size, 0);
        assert_eq!(config.timeout, 0);
        assert!(config.pool.is_none());
        assert!(config.pipelines.is_empty());
        assert!(config.consume.is_empty());
    }

    #[test]
    fn test_parses_loosely_typed_pipelines() {
        let config = load_from_str(
            r#"{
                "pipelines": {
                    "mail": {"driver": "amqp", "priority": "5", "durable": true}
                },
                "consume": ["mail"]
            }"#,
        )
        .unwrap();

        let mail = config.pipeline("mail").unwrap();
        assert_eq!(mail.string("driver", ""), "amqp");
        assert_eq!(mail.int("priority", 10), 5);
        assert_eq!(config.consume, vec!["mail".to_string()]);
    }

    #[test]
    fn test_float_scalar_does_not_reject_config() {
        let config = load_from_str(
            r#"{"pipelines": {"mail": {"priority": 1.5, "weight": 4.0}}}"#,
        )
        .unwrap();

        // Degrades at the accessor, not at the parse.
        let mail = config.pipeline("mail").unwrap();
        assert_eq!(mail.int("priority", 10), 10);
        assert_eq!(mail.int("weight", 0), 4);
    }

    #[test]
    fn test_malformed_input_is_a_serialization_error() {
        let err = load_from_str("{not json").unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_from_path("/nonexistent/broker.json").unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
