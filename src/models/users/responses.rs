use serde::{Deserialize, Serialize};

use super::entities::UserRole;

// 注册成功后返回的用户摘要（绝不回显口令或哈希）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<super::entities::User> for UserSummary {
    fn from(user: super::entities::User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
        }
    }
}
