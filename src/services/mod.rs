pub mod activity_registry;
pub mod roster_service;
pub mod student_registry;
