//! Cryptographic helpers

mod password;
mod tokens;

pub use password::{hash_password, verify_password};
pub use tokens::generate_session_token;
