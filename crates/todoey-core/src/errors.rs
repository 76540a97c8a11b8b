use thiserror::Error;

/// Result type alias using TodoeyError
pub type Result<T> = std::result::Result<T, TodoeyError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that collaborators can match on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Storage
    StorageUnavailable,
    WriteFailed,
    QueryFailed,
    SchemaMismatch,

    // Validation
    ValidationError,
    ConfigInvalid,

    // Referential integrity
    ParentNotFound,
    ItemNotFound,
    CategoryNotFound,
    CategoryNotEmpty,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::StorageUnavailable => "ERR_STORAGE_UNAVAILABLE",
            ExErrorKind::WriteFailed => "ERR_WRITE_FAILED",
            ExErrorKind::QueryFailed => "ERR_QUERY_FAILED",
            ExErrorKind::SchemaMismatch => "ERR_SCHEMA_MISMATCH",
            ExErrorKind::ValidationError => "ERR_VALIDATION",
            ExErrorKind::ConfigInvalid => "ERR_CONFIG_INVALID",
            ExErrorKind::ParentNotFound => "ERR_PARENT_NOT_FOUND",
            ExErrorKind::ItemNotFound => "ERR_ITEM_NOT_FOUND",
            ExErrorKind::CategoryNotFound => "ERR_CATEGORY_NOT_FOUND",
            ExErrorKind::CategoryNotEmpty => "ERR_CATEGORY_NOT_EMPTY",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus optional operation and entity context.
/// Built from a `TodoeyError` when an error crosses a logging or display
/// boundary.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
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

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for every Todoey core operation
///
/// Each operation returns exactly one of these on failure. Nothing is logged
/// and swallowed; the caller decides how to present it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TodoeyError {
    // ===== Storage Errors =====
    /// The store could not be opened or created
    #[error("Storage unavailable at {path}: {cause}")]
    StorageUnavailable { path: String, cause: String },

    /// A save did not commit; nothing from the change-set was applied
    #[error("Write failed in {op}: {cause}")]
    WriteFailed { op: String, cause: String },

    /// A read against the store failed; no partial result is returned
    #[error("Query failed in {op}: {cause}")]
    QueryFailed { op: String, cause: String },

    /// The store on disk belongs to a different schema mode
    #[error("Schema mode mismatch: expected {expected}, found {found}")]
    SchemaMismatch { expected: String, found: String },

    // ===== Validation Errors =====
    /// A record violates a required-field or uniqueness rule
    #[error("Invalid {field}: {reason}")]
    ValidationError { field: String, reason: String },

    /// Configuration could not be loaded or parsed
    #[error("Invalid configuration {source_name}: {reason}")]
    ConfigInvalid { source_name: String, reason: String },

    // ===== Referential Errors =====
    /// Item creation referenced a category that does not exist
    #[error("Parent category not found: {category_id}")]
    ParentNotFound { category_id: String },

    /// Item id is stale or unknown
    #[error("Item not found: {item_id}")]
    ItemNotFound { item_id: String },

    /// Category id is stale or unknown
    #[error("Category not found: {category_id}")]
    CategoryNotFound { category_id: String },

    /// Category still owns items and the delete policy rejects it
    #[error("Cannot delete category {category_id}: has {item_count} items")]
    CategoryNotEmpty {
        category_id: String,
        item_count: usize,
    },
}

impl TodoeyError {
    /// Shorthand for a validation failure on a named field
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        TodoeyError::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Classification of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            TodoeyError::StorageUnavailable { .. } => ExErrorKind::StorageUnavailable,
            TodoeyError::WriteFailed { .. } => ExErrorKind::WriteFailed,
            TodoeyError::QueryFailed { .. } => ExErrorKind::QueryFailed,
            TodoeyError::SchemaMismatch { .. } => ExErrorKind::SchemaMismatch,
            TodoeyError::ValidationError { .. } => ExErrorKind::ValidationError,
            TodoeyError::ConfigInvalid { .. } => ExErrorKind::ConfigInvalid,
            TodoeyError::ParentNotFound { .. } => ExErrorKind::ParentNotFound,
            TodoeyError::ItemNotFound { .. } => ExErrorKind::ItemNotFound,
            TodoeyError::CategoryNotFound { .. } => ExErrorKind::CategoryNotFound,
            TodoeyError::CategoryNotEmpty { .. } => ExErrorKind::CategoryNotEmpty,
        }
    }
}

/// Conversion from TodoeyError to ExError
impl From<TodoeyError> for ExError {
    fn from(err: TodoeyError) -> Self {
        let base = ExError::new(err.kind()).with_message(err.to_string());
        match err {
            TodoeyError::StorageUnavailable { path, .. } => {
                base.with_op("open").with_entity_id(path)
            }
            TodoeyError::WriteFailed { op, .. } | TodoeyError::QueryFailed { op, .. } => {
                base.with_op(op)
            }
            TodoeyError::SchemaMismatch { .. } => base.with_op("open"),
            TodoeyError::ValidationError { .. } => base.with_op("validate"),
            TodoeyError::ConfigInvalid { source_name, .. } => {
                base.with_op("load_config").with_entity_id(source_name)
            }
            TodoeyError::ParentNotFound { category_id } => {
                base.with_op("find_parent").with_entity_id(category_id)
            }
            TodoeyError::ItemNotFound { item_id } => base.with_entity_id(item_id),
            TodoeyError::CategoryNotFound { category_id }
            | TodoeyError::CategoryNotEmpty { category_id, .. } => {
                base.with_entity_id(category_id)
            }
        }
    }
}
