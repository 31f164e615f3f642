pub mod clock;
pub mod projects;
pub mod tracking;
