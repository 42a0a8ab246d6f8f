pub mod auth;
pub mod classes;
pub mod questions;

pub use auth::AuthService;
pub use classes::ClassService;
pub use questions::QuestionService;

use std::sync::Arc;

use actix_web::HttpRequest;

use crate::cache::ObjectCache;

// 从 app data 解析缓存实例
pub(crate) fn get_cache(request: &HttpRequest) -> Arc<dyn ObjectCache> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone()
}

// 成员关系变更后按用户 ID 精确失效身份缓存，
// 避免中间件继续看到过期的 class_id
pub(crate) async fn invalidate_user_cache(request: &HttpRequest, user_ids: &[i64]) {
    let cache = get_cache(request);
    for user_id in user_ids {
        cache.remove(&format!("user:{user_id}")).await;
    }
}
