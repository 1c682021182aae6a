pub mod attendance;
pub mod backup;
pub mod calendar;
pub mod context;
pub mod crud;
pub mod dashboard;
pub mod import;
pub mod log;
pub mod recap;
pub mod records;
pub mod school;
pub mod seed;
pub mod staff;
pub mod state;
pub mod students;
pub mod sync;
pub mod users;
