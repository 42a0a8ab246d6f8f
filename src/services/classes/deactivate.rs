use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ClassService, fetch_current_user};
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{Action, authorize};
use crate::services::invalidate_user_cache;

/// 停用班级
///
/// 不存在与不属于调用者的班级返回同一个未找到错误，不泄露存在性。
pub async fn deactivate_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match fetch_current_user(&storage, request).await {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if !authorize(&user.role, Action::DeactivateClass) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::RoleDenied,
            "Only teachers can deactivate a class",
        )));
    }

    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) if class.teacher_id == user.id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class not found",
            )));
        }
        Err(e) => {
            error!("Failed to fetch class {}: {}", class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to deactivate class",
                )),
            );
        }
    }

    // 先取成员列表，停用后用于精确失效身份缓存
    let member_ids: Vec<i64> = match storage.list_members(class_id, None).await {
        Ok(members) => members.into_iter().map(|m| m.id).collect(),
        Err(e) => {
            error!("Failed to list members of class {}: {}", class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to deactivate class",
                )),
            );
        }
    };

    match storage.deactivate_class(class_id).await {
        Ok(true) => {
            info!("Class {} deactivated by teacher {}", class_id, user.id);
            let mut affected = member_ids;
            affected.push(user.id);
            invalidate_user_cache(request, &affected).await;
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
                "Class deactivated successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => {
            error!("Failed to deactivate class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to deactivate class",
                )),
            )
        }
    }
}
