pub mod action;
pub mod tracking_entry;
pub mod transaction;
