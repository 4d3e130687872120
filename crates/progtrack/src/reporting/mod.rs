pub mod dashboard;
pub mod import;
pub mod periods;
pub mod programs;
pub mod ratings;
