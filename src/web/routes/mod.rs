pub mod activities;
pub mod students;
