//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod booking_repo;
pub mod profile_repo;
pub mod session_repo;
pub mod subscription_repo;

pub use booking_repo::BookingRepository;
pub use profile_repo::ProfileRepository;
pub use session_repo::SessionRepository;
pub use subscription_repo::SubscriptionRepository;
