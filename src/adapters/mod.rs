//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `events` - Event publisher implementations
//! - `memory` - In-memory stores, clocks, and calendars

pub mod events;
pub mod memory;

pub use events::InMemoryEventPublisher;
pub use memory::{
    FixedClock, InMemoryBalanceStore, InMemoryPolicyStore, InMemoryRequestStore,
    InMemoryScheduleStore, InMemoryVoteStore, SystemClock, WeekdayCalendar,
};
