use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ClassService, fetch_current_user};
use crate::models::classes::{
    entities::MemberRole,
    requests::JoinClassRequest,
    responses::ClassSummary,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{Action, authorize};
use crate::services::invalidate_user_cache;

pub async fn join_class(
    service: &ClassService,
    request: &HttpRequest,
    join_data: JoinClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match fetch_current_user(&storage, request).await {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    // 权限校验：仅学生可通过加入码进班
    if !authorize(&user.role, Action::JoinClass) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::RoleDenied,
            "Only students can join a class with a class code",
        )));
    }

    // 加入码必填，大小写不敏感
    let class_code = join_data.class_code.trim().to_uppercase();
    if class_code.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ClassCodeRequired,
            "Class code is required",
        )));
    }

    // 一名用户同时至多一个班级
    if user.class_id.is_some() {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::AlreadyInClass,
            "You are already in a class. Leave it before joining another",
        )));
    }

    // 只允许加入活跃班级
    let class = match storage.get_class_by_code(&class_code).await {
        Ok(Some(class)) if class.is_active => class,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassCodeInvalid,
                "Invalid class code",
            )));
        }
        Err(e) => {
            error!("Failed to look up class by code: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to join class",
                )),
            );
        }
    };

    match storage
        .join_class(user.id, class.id, MemberRole::Student)
        .await
    {
        Ok(_) => {
            info!("Student {} joined class {}", user.id, class.id);
            invalidate_user_cache(request, &[user.id]).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ClassSummary::from(class),
                "Joined class successfully",
            )))
        }
        // 并发重复加入由 (class_id, user_id) 唯一索引兜底
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::AlreadyInClass, "You are already in this class"),
        )),
        Err(e) => {
            error!("Failed to join class: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to join class",
                )),
            )
        }
    }
}
