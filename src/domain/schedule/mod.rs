//! Schedule domain - work types, weekly schedules, RTO policy, compliance.

mod compliance;
mod entry;
mod errors;
mod policy;
mod week;
mod work_type;

pub use compliance::{check_compliance, ComplianceResult};
pub use entry::WorkScheduleEntry;
pub use errors::ScheduleError;
pub use policy::{CoreHours, RtoPolicy};
pub use week::WorkWeek;
pub use work_type::WorkType;
