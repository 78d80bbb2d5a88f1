//! Subscription model and plan tiers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{SessionType, UnknownTag};
use crate::constants::{
    ELEVATED_MAX_ACTIVE_BOOKINGS, STANDARD_MAX_ACTIVE_BOOKINGS, STANDARD_MONTHLY_BOOKING_LIMIT,
};

/// Subscription plan as sold to students
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    Standard,
    Premium,
    Monthly,
    Yearly,
}

/// Booking privileges granted by a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// STANDARD sessions only, monthly quota, larger active cap
    Standard,
    /// Every session type, no monthly quota, smaller active cap
    Elevated,
}

impl SubscriptionPlan {
    /// Tier granted by this plan
    pub fn tier(&self) -> PlanTier {
        match self {
            Self::Standard => PlanTier::Standard,
            Self::Premium | Self::Monthly | Self::Yearly => PlanTier::Elevated,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Premium => "premium",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Name used in user-facing messages
    pub fn display_label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            other => other.as_str(),
        }
    }
}

impl PlanTier {
    /// Maximum simultaneous active bookings
    pub fn max_active_bookings(&self) -> i64 {
        match self {
            Self::Standard => STANDARD_MAX_ACTIVE_BOOKINGS,
            Self::Elevated => ELEVATED_MAX_ACTIVE_BOOKINGS,
        }
    }

    /// Monthly booking quota; `None` means unlimited
    pub fn monthly_booking_limit(&self) -> Option<i64> {
        match self {
            Self::Standard => Some(STANDARD_MONTHLY_BOOKING_LIMIT),
            Self::Elevated => None,
        }
    }

    pub fn can_access(&self, session_type: SessionType) -> bool {
        match self {
            Self::Elevated => true,
            Self::Standard => session_type == SessionType::Standard,
        }
    }
}

impl std::fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubscriptionPlan {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(UnknownTag::new("subscription plan", other)),
        }
    }
}

/// Subscription lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::str::FromStr for SubscriptionStatus {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(UnknownTag::new("subscription status", other)),
        }
    }
}

/// A user's subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan: SubscriptionPlan,
    pub status: SubscriptionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_tiers() {
        assert_eq!(SubscriptionPlan::Standard.tier(), PlanTier::Standard);
        assert_eq!(SubscriptionPlan::Premium.tier(), PlanTier::Elevated);
        assert_eq!(SubscriptionPlan::Monthly.tier(), PlanTier::Elevated);
        assert_eq!(SubscriptionPlan::Yearly.tier(), PlanTier::Elevated);
    }

    #[test]
    fn test_tier_limits() {
        assert_eq!(PlanTier::Elevated.max_active_bookings(), 2);
        assert_eq!(PlanTier::Standard.max_active_bookings(), 4);
        assert_eq!(PlanTier::Elevated.monthly_booking_limit(), None);
        assert_eq!(PlanTier::Standard.monthly_booking_limit(), Some(4));
    }

    #[test]
    fn test_tier_access() {
        assert!(PlanTier::Standard.can_access(SessionType::Standard));
        assert!(!PlanTier::Standard.can_access(SessionType::Premium));
        assert!(!PlanTier::Standard.can_access(SessionType::Vip));
        assert!(PlanTier::Elevated.can_access(SessionType::Vip));
    }

    #[test]
    fn test_display_label() {
        assert_eq!(SubscriptionPlan::Standard.display_label(), "Standard");
        assert_eq!(SubscriptionPlan::Yearly.display_label(), "yearly");
    }

    #[test]
    fn test_plan_round_trips_through_tag() {
        let plan: SubscriptionPlan = "monthly".parse().unwrap();
        assert_eq!(plan.as_str(), "monthly");
        assert_eq!(
            "gold".parse::<SubscriptionPlan>().unwrap_err(),
            UnknownTag::new("subscription plan", "gold")
        );
    }
}
