//! Lesson session model

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UnknownTag;

/// Session tier. Only STANDARD sessions are open to the standard plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionType {
    Standard,
    Premium,
    Vip,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Premium => "PREMIUM",
            Self::Vip => "VIP",
        }
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SessionType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDARD" => Ok(Self::Standard),
            "PREMIUM" => Ok(Self::Premium),
            "VIP" => Ok(Self::Vip),
            other => Err(UnknownTag::new("session type", other)),
        }
    }
}

/// A scheduled lesson session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub title: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub max_participants: i32,
    pub current_participants: i32,
    pub required_points: i32,
    pub session_type: SessionType,
    pub is_active: bool,
}

impl Session {
    /// When the session finishes
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.scheduled_at + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Whether the session finished before `now`
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.ends_at() < now
    }

    /// Fractional hours from `now` to the scheduled start; negative once started
    pub fn hours_until_start(&self, now: DateTime<Utc>) -> f64 {
        (self.scheduled_at - now).num_milliseconds() as f64 / 3_600_000.0
    }

    /// Seats still free, never negative
    pub fn available_spots(&self) -> i32 {
        (self.max_participants - self.current_participants).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session_at(scheduled_at: DateTime<Utc>) -> Session {
        Session {
            id: Uuid::new_v4(),
            title: "Conversation club".to_string(),
            scheduled_at,
            duration_minutes: 60,
            max_participants: 8,
            current_participants: 3,
            required_points: 0,
            session_type: SessionType::Standard,
            is_active: true,
        }
    }

    #[test]
    fn test_hours_until_start() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let session = session_at(now + Duration::minutes(90));
        assert_eq!(session.hours_until_start(now), 1.5);

        let started = session_at(now - Duration::minutes(30));
        assert_eq!(started.hours_until_start(now), -0.5);
    }

    #[test]
    fn test_has_ended_uses_duration() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();

        // Started 30 minutes ago, runs for an hour
        assert!(!session_at(now - Duration::minutes(30)).has_ended(now));
        assert!(session_at(now - Duration::minutes(61)).has_ended(now));
    }

    #[test]
    fn test_available_spots_is_clamped() {
        let mut session = session_at(Utc::now());
        assert_eq!(session.available_spots(), 5);

        session.current_participants = 10;
        assert_eq!(session.available_spots(), 0);
    }

    #[test]
    fn test_session_type_tags() {
        assert_eq!("PREMIUM".parse::<SessionType>().unwrap(), SessionType::Premium);
        assert_eq!(SessionType::Vip.to_string(), "VIP");
        assert!("premium".parse::<SessionType>().is_err());
    }
}
