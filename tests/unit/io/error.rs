//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use traitmix::TraitError;
    use traitmix::io::error::document_error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = TraitError::FileSystem {
            path: "/tmp/spec.json".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/spec.json"));
    }

    // Tests core errors name the offending input
    #[test]
    fn test_core_error_messages() {
        let weights = TraitError::InvalidFeatureWeights {
            feature: "Hat".to_string(),
        };
        let count = TraitError::InvalidCount { count: -7 };
        let malformed = TraitError::MalformedSpecification {
            reason: "missing field `count`".to_string(),
        };

        assert!(weights.to_string().contains("Hat"));
        assert!(count.to_string().contains("-7"));
        assert!(malformed.to_string().contains("missing field"));
        assert!(weights.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = TraitError::InvalidParameter {
            parameter: "threads",
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("threads"));
        assert!(message.contains('0'));
        assert!(message.contains("must be at least 1"));
    }

    // Tests layer errors carry their path or placeholder
    #[test]
    fn test_layer_error_messages() {
        let missing = TraitError::MissingLayer {
            path: PathBuf::from("hat/crown.png"),
        };
        let unknown = TraitError::UnknownPlaceholder {
            template: "{Eyes}.png".to_string(),
            placeholder: "Eyes".to_string(),
        };

        assert!(missing.to_string().contains("hat/crown.png"));
        assert!(unknown.to_string().contains("'Eyes'"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = TraitError::ImageExport {
            path: PathBuf::from("/restricted/00001.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/00001.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests JSON errors convert and keep their source
    #[test]
    fn test_json_error_conversion() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = TraitError::from(parse_error);

        assert!(matches!(error, TraitError::Json { .. }));
        assert!(error.source().is_some());
    }

    // Tests shape errors become malformed specifications and syntax errors stay JSON errors
    #[test]
    fn test_document_error_classification() {
        let shape = serde_json::from_str::<u32>("\"ten\"").unwrap_err();
        assert!(matches!(
            document_error(shape),
            TraitError::MalformedSpecification { .. }
        ));

        let syntax = serde_json::from_str::<u32>("1 x").unwrap_err();
        assert!(matches!(document_error(syntax), TraitError::Json { .. }));
    }
}
