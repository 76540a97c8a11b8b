use todoey_core::errors::{ExError, ExErrorKind, TodoeyError};

#[test]
fn test_parent_not_found_verifiable_by_kind() {
    let err = TodoeyError::ParentNotFound {
        category_id: "missing".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::ParentNotFound);
    assert_eq!(ex_err.code(), "ERR_PARENT_NOT_FOUND");
    assert_eq!(ex_err.entity_id(), Some("missing"));
    assert_eq!(ex_err.op(), Some("find_parent"));
}

#[test]
fn test_write_failed_carries_op_and_cause() {
    let err = TodoeyError::WriteFailed {
        op: "save".to_string(),
        cause: "disk I/O error".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::WriteFailed);
    assert_eq!(ex_err.op(), Some("save"));
    assert!(ex_err.message().contains("disk I/O error"));
}

#[test]
fn test_category_not_empty_distinct_from_not_found() {
    let not_empty: ExError = TodoeyError::CategoryNotEmpty {
        category_id: "c1".to_string(),
        item_count: 3,
    }
    .into();
    let not_found: ExError = TodoeyError::CategoryNotFound {
        category_id: "c1".to_string(),
    }
    .into();

    assert_ne!(not_empty.kind(), not_found.kind());
    assert_eq!(not_empty.entity_id(), not_found.entity_id());
    assert!(not_empty.message().contains("3 items"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::StorageUnavailable, "ERR_STORAGE_UNAVAILABLE"),
        (ExErrorKind::WriteFailed, "ERR_WRITE_FAILED"),
        (ExErrorKind::QueryFailed, "ERR_QUERY_FAILED"),
        (ExErrorKind::ValidationError, "ERR_VALIDATION"),
        (ExErrorKind::ItemNotFound, "ERR_ITEM_NOT_FOUND"),
        (ExErrorKind::CategoryNotEmpty, "ERR_CATEGORY_NOT_EMPTY"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_every_variant_maps_to_its_own_kind() {
    let errors = vec![
        TodoeyError::StorageUnavailable {
            path: "p".into(),
            cause: "c".into(),
        },
        TodoeyError::WriteFailed {
            op: "o".into(),
            cause: "c".into(),
        },
        TodoeyError::QueryFailed {
            op: "o".into(),
            cause: "c".into(),
        },
        TodoeyError::SchemaMismatch {
            expected: "hierarchical".into(),
            found: "flat".into(),
        },
        TodoeyError::validation("name", "empty"),
        TodoeyError::ConfigInvalid {
            source_name: "todoey.toml".into(),
            reason: "bad".into(),
        },
        TodoeyError::ParentNotFound {
            category_id: "c".into(),
        },
        TodoeyError::ItemNotFound { item_id: "i".into() },
        TodoeyError::CategoryNotFound {
            category_id: "c".into(),
        },
        TodoeyError::CategoryNotEmpty {
            category_id: "c".into(),
            item_count: 1,
        },
    ];

    let mut codes: Vec<&str> = errors.iter().map(|e| e.kind().code()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), errors.len(), "codes must be unique per variant");
}
