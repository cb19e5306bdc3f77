//! In-memory adapters.
//!
//! Store, clock, and calendar implementations backing tests and the demo
//! binary. They honor the same contracts a database-backed adapter would,
//! version preconditions included.

mod balance_store;
mod calendar;
mod clock;
mod policy_store;
mod request_store;
mod schedule_store;
mod vote_store;

pub use balance_store::InMemoryBalanceStore;
pub use calendar::WeekdayCalendar;
pub use clock::{FixedClock, SystemClock};
pub use policy_store::InMemoryPolicyStore;
pub use request_store::InMemoryRequestStore;
pub use schedule_store::InMemoryScheduleStore;
pub use vote_store::InMemoryVoteStore;
