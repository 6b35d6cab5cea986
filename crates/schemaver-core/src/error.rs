use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("schema version {0} is not supported")]
    UnsupportedVersion(u32),

    #[error("no migration step registered from version {from} to {}", .from + 1)]
    MissingMigrationStep { from: u32 },

    #[error("no schema revisions are registered")]
    NoRevisions,

    #[error("invalid schema_version tag: {0}")]
    InvalidVersionTag(serde_json::Value),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_step_message_names_both_versions() {
        let err = Error::MissingMigrationStep { from: 3 };
        assert_eq!(
            err.to_string(),
            "no migration step registered from version 3 to 4"
        );
    }

    #[test]
    fn test_invalid_version_tag_message_shows_json() {
        let err = Error::InvalidVersionTag(serde_json::json!("3"));
        assert_eq!(err.to_string(), r#"invalid schema_version tag: "3""#);
    }

    #[test]
    fn test_unsupported_version_message() {
        assert_eq!(
            Error::UnsupportedVersion(99).to_string(),
            "schema version 99 is not supported"
        );
    }
}
