use serde::Deserialize;

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username or e-mail
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

// Password reset request: always answered positively to avoid account
// enumeration.
#[derive(Debug, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

// Exchange of a reset code for a session. `codigo` is the 6-digit code
// delivered by e-mail.
#[derive(Debug, Deserialize)]
pub struct PasswordResetLoginRequest {
    pub email: String,
    pub codigo: String,
}
