//! Booking eligibility value objects
//!
//! These are produced by the eligibility engine for a single evaluation and
//! serialized as-is to API clients.

use serde::Serialize;

use super::{SessionType, SubscriptionPlan};

/// Snapshot of a user's booking allowance for the current month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingLimitsInfo {
    pub plan: Option<SubscriptionPlan>,
    pub has_active_subscription: bool,
    pub max_active_bookings: i64,
    pub active_bookings_count: i64,
    pub remaining_active_bookings: i64,
    /// `None` means unlimited
    pub monthly_booking_limit: Option<i64>,
    pub monthly_booking_count: i64,
    pub remaining_monthly_bookings: Option<i64>,
    /// `YYYY-MM`, UTC
    pub current_month: String,
}

impl BookingLimitsInfo {
    /// Limits of a user without an active subscription
    pub fn unsubscribed(current_month: String) -> Self {
        Self {
            plan: None,
            has_active_subscription: false,
            max_active_bookings: 0,
            active_bookings_count: 0,
            remaining_active_bookings: 0,
            monthly_booking_limit: None,
            monthly_booking_count: 0,
            remaining_monthly_bookings: None,
            current_month,
        }
    }
}

/// Every input the admission decision was derived from
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationDetails {
    pub user_plan: Option<SubscriptionPlan>,
    pub has_active_subscription: bool,
    pub active_bookings_count: i64,
    pub max_active_bookings: i64,
    pub remaining_active_bookings: i64,
    /// Counted for the session's month, not the current one
    pub monthly_booking_count: i64,
    pub monthly_booking_limit: Option<i64>,
    pub remaining_monthly_bookings: Option<i64>,
    pub current_month: String,
    pub session_month: String,
    pub hours_until_session: f64,
    pub meets_notice_period: bool,
    pub has_session_ended: bool,
    pub can_access_session_type: bool,
    pub session_type: Option<SessionType>,
    pub has_sufficient_points: bool,
    pub available_spots: i32,
    pub is_session_active: bool,
    pub already_booked: bool,
}

impl ValidationDetails {
    /// Admission reconstructed from the flags alone.
    ///
    /// Always agrees with [`BookingEligibilityResult::is_allowed`] for an
    /// evaluated session.
    pub fn all_checks_pass(&self) -> bool {
        self.has_active_subscription
            && !self.already_booked
            && self.meets_notice_period
            && !self.has_session_ended
            && self.is_session_active
            && self.available_spots > 0
            && self.has_sufficient_points
            && self.can_access_session_type
            && self.remaining_active_bookings > 0
            && self.remaining_monthly_bookings.is_none_or(|remaining| remaining > 0)
    }
}

/// Outcome of one eligibility evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEligibilityResult {
    pub is_allowed: bool,
    /// Empty iff `is_allowed`
    pub reasons: Vec<String>,
    pub validation_details: ValidationDetails,
}

impl BookingEligibilityResult {
    pub fn from_reasons(reasons: Vec<String>, validation_details: ValidationDetails) -> Self {
        Self {
            is_allowed: reasons.is_empty(),
            reasons,
            validation_details,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::from_reasons(vec![reason.into()], ValidationDetails::default())
    }
}
