use flyangt_core_types::RunId;
use thiserror::Error;

/// Result type alias using the canonical `ExError`
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable by tests, the CLI exit
/// message and any JSON surface that reports failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input / validation
    InvalidInput,
    /// A dotted value path is malformed or cannot be traversed
    InvalidPath,
    NotFound,
    /// A configuration file or section failed to parse or validate
    InvalidConfig,

    // Batch safety
    /// A batch operation would touch more records than its configured cap
    SafetyCapExceeded,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidPath => "ERR_INVALID_PATH",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::SafetyCapExceeded => "ERR_SAFETY_CAP_EXCEEDED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional
/// context (operation, entity, run id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    run_id: Option<RunId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            run_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (RC id, record id, group id, storage key)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add run ID context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for the release tooling
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlyError {
    /// RC record not present in the registry
    #[error("RC not found: {rc_id}")]
    RcNotFound { rc_id: String },

    /// Value path could not be parsed or traversed
    #[error("Invalid value path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// Retention batch larger than the configured safety cap
    #[error("{eligible} records are eligible but the safety cap is {cap}; narrow the filter")]
    RetentionCapExceeded { eligible: usize, cap: usize },

    /// Record referenced by an update does not exist
    #[error("Record not found: {record_id}")]
    RecordNotFound { record_id: String },

    /// Configuration failed to parse or validate
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// JSON (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<FlyError> for ExError {
    fn from(err: FlyError) -> Self {
        let message = err.to_string();
        match err {
            FlyError::RcNotFound { rc_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(rc_id)
                .with_message(message),
            FlyError::InvalidPath { path, .. } => ExError::new(ExErrorKind::InvalidPath)
                .with_entity_id(path)
                .with_message(message),
            FlyError::RetentionCapExceeded { .. } => {
                ExError::new(ExErrorKind::SafetyCapExceeded).with_message(message)
            }
            FlyError::RecordNotFound { record_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(record_id)
                .with_message(message),
            FlyError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }
            FlyError::Serialization(_) => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for FlyError {
    fn from(err: serde_json::Error) -> Self {
        FlyError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        FlyError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_are_stable() {
        assert_eq!(ExErrorKind::InvalidPath.code(), "ERR_INVALID_PATH");
        assert_eq!(
            ExErrorKind::SafetyCapExceeded.code(),
            "ERR_SAFETY_CAP_EXCEEDED"
        );
        assert_eq!(ExErrorKind::NotFound.code(), "ERR_NOT_FOUND");
    }

    #[test]
    fn test_fly_error_converts_with_entity() {
        let err: ExError = FlyError::RcNotFound {
            rc_id: "RC-20260101-000000".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.entity_id(), Some("RC-20260101-000000"));
        assert!(err.message().contains("RC not found"));
    }

    #[test]
    fn test_display_includes_code_and_op() {
        let err = ExError::new(ExErrorKind::Io)
            .with_op("storage_set")
            .with_message("disk full");
        let s = err.to_string();
        assert!(s.starts_with("[ERR_IO]"));
        assert!(s.contains("storage_set"));
        assert!(s.contains("disk full"));
    }

    #[test]
    fn test_run_id_is_carried() {
        let run_id = RunId::from_string("run-1".to_string());
        let err = ExError::from(FlyError::InvalidConfig {
            reason: "bad".to_string(),
        })
        .with_run_id(run_id.clone());
        assert_eq!(err.run_id(), Some(&run_id));
        assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    }

    #[test]
    fn test_source_chain() {
        let inner = ExError::new(ExErrorKind::Serialization).with_message("bad json");
        let outer = ExError::new(ExErrorKind::Persistence).with_source(inner);
        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::Serialization)
        );
    }
}
