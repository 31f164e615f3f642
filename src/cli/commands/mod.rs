pub mod config;
pub mod init;
pub mod log;
pub mod projects;
pub mod sessions;
pub mod start;
pub mod status;
pub mod stop;
pub mod summary;
