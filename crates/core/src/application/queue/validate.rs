// Request validation (runs before any store access)
//
// Recipe references are opaque: any integer is accepted and stored as-is.

use crate::domain::QueueId;
use crate::error::{AppError, Result};

/// Queue ids are assigned by the store starting at 1
pub fn validate_queue_id(queue_id: QueueId) -> Result<()> {
    if queue_id <= 0 {
        return Err(AppError::Validation(format!(
            "Queue id must be positive, got {}",
            queue_id
        )));
    }
    Ok(())
}
