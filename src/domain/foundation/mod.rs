//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types, and the event
//! infrastructure that form the vocabulary of the Anchorwork domain.

mod day_credits;
mod errors;
mod events;
mod ids;
mod state_machine;
mod timestamp;
mod work_date;

pub use day_credits::DayCredits;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{RequestId, TeamId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use work_date::WorkDate;
