//! Booking eligibility engine
//!
//! Decides whether a user may book a session from their subscription plan,
//! booking caps, the notice period, the session's state and their point
//! balance. Evaluation is read-only: it never creates a booking.

use std::sync::Arc;

use chrono::Datelike;
use tracing::debug;
use uuid::Uuid;

use crate::{
    constants::{MIN_BOOKING_NOTICE_HOURS, messages},
    db::BookingDataSource,
    error::AppResult,
    models::{
        BookingEligibilityResult, BookingLimitsInfo, PlanTier, SessionType, SubscriptionPlan,
        ValidationDetails,
    },
    utils::{Clock, month_display, month_key},
};

/// Booking eligibility engine
#[derive(Clone)]
pub struct BookingValidationService {
    source: Arc<dyn BookingDataSource>,
    clock: Arc<dyn Clock>,
}

impl BookingValidationService {
    pub fn new(source: Arc<dyn BookingDataSource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }

    /// Current-month booking allowance of a user.
    ///
    /// A user without a subscription gets a zeroed snapshot, not an error.
    pub async fn get_booking_limits(&self, user_id: Uuid) -> AppResult<BookingLimitsInfo> {
        let now = self.clock.now();
        let current_month = month_key(now);

        let Some(subscription) = self.source.find_active_subscription(user_id).await? else {
            return Ok(BookingLimitsInfo::unsubscribed(current_month));
        };

        let tier = subscription.plan.tier();
        let (active_bookings, monthly_booking_count) = futures::try_join!(
            self.source.find_active_bookings(user_id),
            self.source
                .count_monthly_standard_bookings(user_id, now.year(), now.month()),
        )?;

        let active_bookings_count = active_bookings.len() as i64;
        let max_active_bookings = tier.max_active_bookings();
        let monthly_booking_limit = tier.monthly_booking_limit();

        Ok(BookingLimitsInfo {
            plan: Some(subscription.plan),
            has_active_subscription: true,
            max_active_bookings,
            active_bookings_count,
            remaining_active_bookings: remaining(max_active_bookings, active_bookings_count),
            monthly_booking_limit,
            monthly_booking_count,
            remaining_monthly_bookings: monthly_booking_limit
                .map(|limit| remaining(limit, monthly_booking_count)),
            current_month,
        })
    }

    /// Evaluate every booking rule for `user_id` against `session_id`.
    ///
    /// Business-rule failures are reported as reasons, never as errors; only
    /// data-source failures surface as `Err`.
    pub async fn validate_booking(
        &self,
        user_id: Uuid,
        session_id: Uuid,
    ) -> AppResult<BookingEligibilityResult> {
        let now = self.clock.now();

        let (session, subscription, active_bookings, profile) = futures::try_join!(
            self.source.find_session(session_id),
            self.source.find_active_subscription(user_id),
            self.source.find_active_bookings(user_id),
            self.source.find_profile(user_id),
        )?;

        let Some(session) = session else {
            debug!(%user_id, %session_id, "Booking rejected: session not found");
            return Ok(BookingEligibilityResult::rejected(
                messages::SESSION_NOT_FOUND,
            ));
        };

        let plan = subscription.map(|s| s.plan);
        let tier = plan.map(|p| p.tier());
        let session_start = session.scheduled_at;

        // The monthly quota is charged against the session's month
        let monthly_booking_count = match tier {
            Some(_) => {
                self.source
                    .count_monthly_standard_bookings(
                        user_id,
                        session_start.year(),
                        session_start.month(),
                    )
                    .await?
            }
            None => 0,
        };

        let active_bookings_count = active_bookings.len() as i64;
        let max_active_bookings = tier.map_or(0, |t| t.max_active_bookings());
        let monthly_booking_limit = tier.and_then(|t| t.monthly_booking_limit());

        let hours_until_session = session.hours_until_start(now);
        let has_session_ended = session.has_ended(now);
        let available_spots = session.available_spots();
        let available_points = profile.as_ref().map_or(0, |p| p.points);
        let has_sufficient_points = session.required_points <= 0
            || profile
                .as_ref()
                .is_some_and(|p| p.points >= session.required_points);

        let details = ValidationDetails {
            user_plan: plan,
            has_active_subscription: plan.is_some(),
            active_bookings_count,
            max_active_bookings,
            remaining_active_bookings: remaining(max_active_bookings, active_bookings_count),
            monthly_booking_count,
            monthly_booking_limit,
            remaining_monthly_bookings: monthly_booking_limit
                .map(|limit| remaining(limit, monthly_booking_count)),
            current_month: month_key(now),
            session_month: month_key(session_start),
            hours_until_session,
            meets_notice_period: hours_until_session >= MIN_BOOKING_NOTICE_HOURS,
            has_session_ended,
            can_access_session_type: tier.is_some_and(|t| t.can_access(session.session_type)),
            session_type: Some(session.session_type),
            has_sufficient_points,
            available_spots,
            is_session_active: session.is_active,
            already_booked: active_bookings.iter().any(|b| b.session_id == session.id),
        };

        let mut reasons = Vec::new();

        if !details.has_active_subscription {
            reasons.push(messages::SUBSCRIPTION_REQUIRED.to_string());
        }

        if details.already_booked {
            reasons.push(messages::ALREADY_BOOKED.to_string());
        }

        // An ended session gets its own reason instead
        if !details.meets_notice_period && !has_session_ended {
            reasons.push(notice_period_message(hours_until_session));
        }

        if has_session_ended {
            reasons.push(messages::SESSION_ENDED.to_string());
        }

        if !details.is_session_active {
            reasons.push(messages::SESSION_INACTIVE.to_string());
        }

        if available_spots <= 0 {
            reasons.push(messages::SESSION_FULL.to_string());
        }

        if !has_sufficient_points {
            reasons.push(format!(
                "Insufficient points. This session requires {} points, but you have {}.",
                session.required_points, available_points
            ));
        }

        if let (Some(plan), Some(tier)) = (plan, tier) {
            if !details.can_access_session_type {
                reasons.push(session_type_message(plan, session.session_type));
            }

            if active_bookings_count >= max_active_bookings {
                reasons.push(format!(
                    "You have reached the maximum of {} active bookings allowed by your plan.",
                    max_active_bookings
                ));
            }

            if tier == PlanTier::Standard {
                if let Some(limit) = monthly_booking_limit {
                    if monthly_booking_count >= limit {
                        reasons.push(format!(
                            "You have reached your monthly limit of {} bookings for {}.",
                            limit,
                            month_display(session_start)
                        ));
                    }
                }
            }
        }

        let result = BookingEligibilityResult::from_reasons(reasons, details);

        debug!(
            %user_id,
            %session_id,
            allowed = result.is_allowed,
            reasons = result.reasons.len(),
            "Booking eligibility evaluated"
        );

        Ok(result)
    }
}

fn remaining(limit: i64, used: i64) -> i64 {
    (limit - used).max(0)
}

fn notice_period_message(hours_until_session: f64) -> String {
    format!(
        "Sessions must be booked at least {} hours in advance. This session starts in {} hours.",
        MIN_BOOKING_NOTICE_HOURS,
        hours_until_session.floor()
    )
}

fn session_type_message(plan: SubscriptionPlan, session_type: SessionType) -> String {
    format!(
        "Your {} plan does not include access to {} sessions.",
        plan.display_label(),
        session_type
    )
}
