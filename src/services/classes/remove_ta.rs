use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ClassService, fetch_current_user};
use crate::models::classes::{entities::MemberRole, responses::TaListResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{Action, authorize};
use crate::services::invalidate_user_cache;

/// 移除助教，幂等：重复调用为无操作
pub async fn remove_ta(
    service: &ClassService,
    request: &HttpRequest,
    ta_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match fetch_current_user(&storage, request).await {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if !authorize(&user.role, Action::ManageTa) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::RoleDenied,
            "Only teachers can remove teaching assistants",
        )));
    }

    let class = match storage.get_active_class_by_teacher(user.id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::NoActiveClass,
                "You have no active class",
            )));
        }
        Err(e) => {
            error!("Failed to fetch active class: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to remove TA",
                )),
            );
        }
    };

    // 存储层删除成员记录并仅在回引仍指向本班级时清除
    match storage.leave_class(ta_id, class.id).await {
        Ok(removed) => {
            if removed {
                info!("TA {} removed from class {} by {}", ta_id, class.id, user.id);
                invalidate_user_cache(request, &[ta_id]).await;
            }
        }
        Err(e) => {
            error!("Failed to remove TA {}: {}", ta_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to remove TA",
                )),
            );
        }
    }

    match storage.list_members(class.id, Some(MemberRole::Ta)).await {
        Ok(teaching_assistants) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TaListResponse {
                teaching_assistants,
            },
            "TA removed successfully",
        ))),
        Err(e) => {
            error!("Failed to list TAs of class {}: {}", class.id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to remove TA",
                )),
            )
        }
    }
}
