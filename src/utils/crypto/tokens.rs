//! Session token generation

use rand::Rng;
use rand::distributions::Alphanumeric;

const SESSION_TOKEN_LENGTH: usize = 40;

/// Generate an opaque, URL-safe session token
pub fn generate_session_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
