//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use foodq_core::domain::DomainError;
use foodq_core::error::AppError;
use jsonrpsee::types::ErrorObjectOwned;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const CONFLICT: i32 = 4002;
    pub const INVALID_POSITION: i32 = 4004;
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const DB_ERROR: i32 = 5001;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    match err {
        AppError::Validation(msg) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, msg, None::<()>)
        }
        AppError::NotFound(msg) => ErrorObjectOwned::owned(code::NOT_FOUND, msg, None::<()>),
        AppError::Conflict(msg) => ErrorObjectOwned::owned(code::CONFLICT, msg, None::<()>),
        AppError::Database(msg) => ErrorObjectOwned::owned(code::DB_ERROR, msg, None::<()>),
        AppError::Internal(msg) => ErrorObjectOwned::owned(code::INTERNAL_ERROR, msg, None::<()>),
        AppError::Config(msg) => ErrorObjectOwned::owned(code::INTERNAL_ERROR, msg, None::<()>),
        AppError::Serialization(e) => {
            ErrorObjectOwned::owned(code::INTERNAL_ERROR, e.to_string(), None::<()>)
        }
        AppError::Domain(e) => domain_error(e),
    }
}

fn domain_error(err: DomainError) -> ErrorObjectOwned {
    match err {
        DomainError::NotPresent(recipe_id) => ErrorObjectOwned::owned(
            code::NOT_FOUND,
            err.to_string(),
            Some(serde_json::json!({ "recipe_id": recipe_id })),
        ),
        DomainError::InvalidPosition { position, max } => ErrorObjectOwned::owned(
            code::INVALID_POSITION,
            err.to_string(),
            Some(serde_json::json!({ "position": position, "max": max })),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_present_shares_not_found_code() {
        let err = to_rpc_error(AppError::Domain(DomainError::NotPresent(8)));
        assert_eq!(err.code(), code::NOT_FOUND);

        let err = to_rpc_error(AppError::NotFound("Queue 1 not found".to_string()));
        assert_eq!(err.code(), code::NOT_FOUND);
    }

    #[test]
    fn test_invalid_position_carries_bounds() {
        let err = to_rpc_error(AppError::Domain(DomainError::InvalidPosition {
            position: 3,
            max: 0,
        }));

        assert_eq!(err.code(), code::INVALID_POSITION);
        let data: serde_json::Value =
            serde_json::from_str(err.data().unwrap().get()).unwrap();
        assert_eq!(data["position"], 3);
        assert_eq!(data["max"], 0);
    }

    #[test]
    fn test_storage_and_validation_codes() {
        assert_eq!(
            to_rpc_error(AppError::Database("locked".to_string())).code(),
            code::DB_ERROR
        );
        assert_eq!(
            to_rpc_error(AppError::Validation("bad id".to_string())).code(),
            code::VALIDATION_ERROR
        );
    }
}
