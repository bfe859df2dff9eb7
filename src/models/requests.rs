use serde::Serialize;

// Form payloads for the settings endpoints (application/x-www-form-urlencoded)

#[derive(Debug, Serialize, Clone)]
pub struct ChangeUsernameRequest {
    pub username: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct ChangeEmailRequest {
    pub email: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct ChangePasswordRequest {
    #[serde(rename = "oldPass")]
    pub old_password: String,
    #[serde(rename = "newPass")]
    pub new_password: String,
}
