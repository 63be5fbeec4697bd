pub mod activity;
pub mod seed;
pub mod student;

pub use activity::{Activity, ActivityRoster, ParticipantRow};
pub use seed::seed_activities;
pub use student::Student;
