pub mod geo;
pub mod ledger;
pub mod roster;
pub mod service;

pub use service::AttendanceService;
