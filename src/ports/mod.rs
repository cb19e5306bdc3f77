//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `BalanceStore` - RewardBalance rows with version-guarded writes
//! - `ScheduleStore` - WorkScheduleEntry upsert and range reads
//! - `RequestStore` - RemoteDayRequest lifecycle rows
//! - `VoteStore` - Anchor-day ballots per `(team, user, week)`
//! - `PolicyStore` - Per-team RTO policy
//!
//! ## Environment Ports
//!
//! - `Clock` - Injected time source
//! - `WorkingDayCalendar` - Which dates count as working days
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events

mod balance_store;
mod clock;
mod event_publisher;
mod policy_store;
mod request_store;
mod schedule_store;
mod store_error;
mod vote_store;
mod working_calendar;

pub use balance_store::{BalanceStore, Version, VersionedBalance};
pub use clock::Clock;
pub use event_publisher::EventPublisher;
pub use policy_store::PolicyStore;
pub use request_store::RequestStore;
pub use schedule_store::ScheduleStore;
pub use store_error::StoreError;
pub use vote_store::VoteStore;
pub use working_calendar::WorkingDayCalendar;
