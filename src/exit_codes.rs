//! Exit code constants for the herald CLI.
//!
//! - 0: Success
//! - 1: User error (bad options, invalid template, invalid pattern)
//! - 2: Event input failure (missing or malformed push event)
//! - 3: Delivery failure (transport error or non-2xx response)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or an uncompilable pattern.
pub const USER_ERROR: i32 = 1;

/// The push event could not be read or parsed.
pub const EVENT_FAILURE: i32 = 2;

/// The webhook delivery failed.
pub const DELIVERY_FAILURE: i32 = 3;
