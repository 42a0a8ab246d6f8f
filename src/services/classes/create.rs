use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ClassService, fetch_current_user};
use crate::models::classes::{requests::CreateClassRequest, responses::ClassSummary};
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{Action, authorize};
use crate::services::invalidate_user_cache;
use crate::utils::validate::{validate_class_name, validate_subject};

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match fetch_current_user(&storage, request).await {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    // 权限校验：仅教师可建班
    if !authorize(&user.role, Action::CreateClass) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::RoleDenied,
            "Only teachers can create classes",
        )));
    }

    // 参数校验
    if let Err(msg) = validate_class_name(&class_data.class_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ClassNameInvalid, msg)));
    }
    if let Err(msg) = validate_subject(&class_data.subject) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::SubjectInvalid, msg))
        );
    }

    // 一名教师同时至多一个活跃班级
    match storage.get_active_class_by_teacher(user.id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ActiveClassExists,
                "You already have an active class. Deactivate it before creating a new one",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check active class: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassCreationFailed,
                    "Class creation failed",
                )),
            );
        }
    }

    // 创建班级（加入码生成与教师回引在存储层同一事务内完成）
    match storage
        .create_class(
            user.id,
            class_data.class_name.trim(),
            class_data.subject.trim(),
        )
        .await
    {
        Ok(class) => {
            info!("Class {} created by teacher {}", class.class_name, user.id);
            // 教师身份缓存中的 class_id 已过期
            invalidate_user_cache(request, &[user.id]).await;
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ClassSummary::from(class),
                "Class created successfully",
            )))
        }
        Err(e) => {
            error!("Class creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassCreationFailed,
                    "Class creation failed",
                )),
            )
        }
    }
}
