//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log output format
pub const DEFAULT_LOG_FORMAT: &str = "pretty";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// BOOKING RULES
// =============================================================================

/// Minimum notice, in hours, between booking and session start
pub const MIN_BOOKING_NOTICE_HOURS: f64 = 24.0;

/// Maximum simultaneous active bookings for elevated-tier plans
pub const ELEVATED_MAX_ACTIVE_BOOKINGS: i64 = 2;

/// Maximum simultaneous active bookings for the standard plan
pub const STANDARD_MAX_ACTIVE_BOOKINGS: i64 = 4;

/// Monthly booking limit for the standard plan (STANDARD sessions only)
pub const STANDARD_MONTHLY_BOOKING_LIMIT: i64 = 4;

/// Fixed rejection messages
pub mod messages {
    pub const SESSION_NOT_FOUND: &str = "Session not found";
    pub const SUBSCRIPTION_REQUIRED: &str = "Active subscription required to book sessions.";
    pub const ALREADY_BOOKED: &str = "You have already booked this session.";
    pub const SESSION_ENDED: &str = "This session has already ended.";
    pub const SESSION_INACTIVE: &str = "This session is not currently active.";
    pub const SESSION_FULL: &str = "This session is full.";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;
