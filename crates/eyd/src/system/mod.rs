pub mod clock;
pub mod mounts;

pub use clock::{quarantine_target, quarantine_timestamp, TIMESTAMP_FORMAT};
pub use mounts::{mounts_under, system_mounts};
