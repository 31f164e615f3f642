pub mod initialize;
pub mod pool;
pub mod schema;
pub mod tracking_repo;
pub mod transaction_repo;
