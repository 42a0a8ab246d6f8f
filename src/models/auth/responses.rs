use serde::{Deserialize, Serialize};

use crate::models::users::entities::User;

// 登录成功响应
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    // access token 有效期（秒）
    pub expires_in: i64,
    pub user: User,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 刷新令牌响应
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

// 令牌校验响应
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenVerificationResponse {
    pub is_valid: bool,
}

// 当前用户信息响应
#[derive(Debug, Serialize, Deserialize)]
pub struct UserInfoResponse {
    pub user: User,
}
