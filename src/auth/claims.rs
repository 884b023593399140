use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,   // User id (UUID)
    pub email: String, // Primary email at issue time
    pub exp: i64,      // Expiration timestamp
    pub iat: i64,      // Issued at timestamp
}
