// Module declarations
mod connection;
mod locale_ops;
mod rbac_ops;
mod session_ops;
mod types;
mod user_ops;


// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
