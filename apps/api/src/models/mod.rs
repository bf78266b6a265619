pub mod alert;
pub mod assessment;
pub mod job;
