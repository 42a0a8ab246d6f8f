use serde::Deserialize;

use super::entities::UserRole;

// 注册请求（来自HTTP请求）
//
// 服务层在入库前把 password 替换为 argon2 哈希。
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}
