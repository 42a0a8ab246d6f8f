pub mod assign_ta;
pub mod create;
pub mod deactivate;
pub mod join;
pub mod leave;
pub mod list;
pub mod my_class;
pub mod remove_ta;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建班级
    pub async fn create_class(
        &self,
        class_data: crate::models::classes::requests::CreateClassRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, request, class_data).await
    }

    // 通过加入码加入班级
    pub async fn join_class(
        &self,
        join_data: crate::models::classes::requests::JoinClassRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        join::join_class(self, request, join_data).await
    }

    // 获取当前班级详情
    pub async fn get_my_class(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        my_class::get_my_class(self, request).await
    }

    // 列出教师的全部班级
    pub async fn list_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_classes(self, request).await
    }

    // 停用班级
    pub async fn deactivate_class(
        &self,
        class_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        deactivate::deactivate_class(self, request, class_id).await
    }

    // 学生退出班级
    pub async fn leave_class(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        leave::leave_class(self, request).await
    }

    // 指派助教
    pub async fn assign_ta(
        &self,
        assign_data: crate::models::classes::requests::AssignTaRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign_ta::assign_ta(self, request, assign_data).await
    }

    // 移除助教
    pub async fn remove_ta(&self, ta_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        remove_ta::remove_ta(self, request, ta_id).await
    }
}

// 变更路径统一从存储重取当前用户，避免在缓存过期窗口内
// 基于陈旧的 class_id 做决策
pub(crate) async fn fetch_current_user(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
) -> Result<User, HttpResponse> {
    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    match storage.get_user_by_id(uid).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: user no longer exists",
        ))),
        Err(e) => {
            tracing::error!("Failed to fetch current user: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching user",
                )),
            )
        }
    }
}
