//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use siteplan::LayoutError;
    use siteplan::io::error::{UnresolvedCause, WithPath, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = LayoutError::FileSystem {
            path: "/tmp/site.json".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read on '/tmp/site.json'"));
    }

    // Tests unresolved landmarks name the parent and the cause
    // Verified by omitting the cause from the message
    #[test]
    fn test_unresolved_landmark_error() {
        let error = LayoutError::UnresolvedLandmark {
            id: "granary".to_string(),
            parent: "citadel".to_string(),
            cause: UnresolvedCause::Cycle,
        };

        let message = error.to_string();
        assert!(message.contains("'granary'"));
        assert!(message.contains("'citadel'"));
        assert!(message.contains("cyclic"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("focus", &"<none>", &"needs a zone");

        let message = error.to_string();
        assert!(message.contains("focus"));
        assert!(message.contains("<none>"));
        assert!(message.contains("needs a zone"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = LayoutError::ImageExport {
            path: PathBuf::from("/restricted/site.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/site.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests decoding errors carry the offending path
    // Verified by mapping parse failures to file system errors
    #[test]
    fn test_parse_error_with_path() {
        let parsed: Result<Vec<u8>, serde_json::Error> = serde_json::from_str("{");

        let error = parsed
            .with_path("plan.json", "parse")
            .expect_err("Truncated JSON must fail");

        assert!(matches!(&error, LayoutError::Parse { path, .. } if path == &PathBuf::from("plan.json")));
        assert!(error.to_string().starts_with("Failed to parse 'plan.json'"));
    }

    // Tests lookup errors name the identifier
    // Verified by formatting the wrong field
    #[test]
    fn test_landmark_identity_errors() {
        let duplicate = LayoutError::DuplicateLandmark { id: "well".into() };
        let unknown = LayoutError::UnknownLandmark { id: "forum".into() };

        assert_eq!(duplicate.to_string(), "Landmark 'well' is defined more than once");
        assert_eq!(unknown.to_string(), "Landmark 'forum' does not exist");
    }
}
