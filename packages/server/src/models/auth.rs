use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::user;
use crate::error::AppError;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Temporary login code issued by the mini-program client.
    pub code: String,
    /// Profile fields the client may pass along at login.
    pub nick_name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub open_id: String,
    pub nick_name: Option<String>,
    pub avatar_url: Option<String>,
    /// True when this login created the user record.
    pub is_new_user: bool,
}

#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub open_id: String,
    pub nick_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub last_login_at: chrono::DateTime<chrono::Utc>,
}

impl From<user::Model> for UserResponse {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            open_id: m.open_id,
            nick_name: m.nick_name,
            avatar_url: m.avatar_url,
            created_at: m.created_at,
            last_login_at: m.last_login_at,
        }
    }
}

#[derive(Deserialize, IntoParams)]
pub struct GetUserQuery {
    pub open_id: String,
}

#[derive(Deserialize, IntoParams)]
pub struct UpdateNicknameQuery {
    pub open_id: String,
    pub nick_name: String,
}

impl UpdateNicknameQuery {
    pub fn validate(&self) -> Result<(), AppError> {
        let nick = self.nick_name.trim();
        if nick.is_empty() || nick.chars().count() > 20 {
            return Err(AppError::Validation(
                "Nickname must be 1-20 characters".into(),
            ));
        }
        Ok(())
    }
}
