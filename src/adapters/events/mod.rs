//! Event publisher adapters.
//!
//! - `InMemoryEventPublisher` - Capturing, in-process publisher for
//!   tests and the demo binary

mod in_memory;

pub use in_memory::InMemoryEventPublisher;
