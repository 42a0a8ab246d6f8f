use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ClassService, fetch_current_user};
use crate::models::classes::{
    entities::MemberRole,
    requests::AssignTaRequest,
    responses::TaListResponse,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{Action, authorize};
use crate::services::invalidate_user_cache;

pub async fn assign_ta(
    service: &ClassService,
    request: &HttpRequest,
    assign_data: AssignTaRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match fetch_current_user(&storage, request).await {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if !authorize(&user.role, Action::ManageTa) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::RoleDenied,
            "Only teachers can assign teaching assistants",
        )));
    }

    let username = assign_data.username.trim();
    if username.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TaUsernameRequired,
            "TA username is required",
        )));
    }

    // 指派目标是教师当前的活跃班级
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
                    "Failed to assign TA",
                )),
            );
        }
    };

    let ta = match storage.get_user_by_username(username).await {
        Ok(Some(ta)) => ta,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            error!("Failed to fetch user {}: {}", username, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to assign TA",
                )),
            );
        }
    };

    if ta.role != UserRole::Ta {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::RoleDenied,
            "User is not a teaching assistant",
        )));
    }

    // 已在其他班级的助教不可重复指派
    if let Some(existing_class_id) = ta.class_id
        && existing_class_id != class.id
    {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::TaAlreadyAssigned,
            "This TA is already assigned to another class",
        )));
    }

    // 幂等：已有成员记录时不再插入
    match storage.get_membership(ta.id, class.id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            if let Err(e) = storage.join_class(ta.id, class.id, MemberRole::Ta).await {
                if !e.is_unique_violation() {
                    error!("Failed to assign TA {}: {}", ta.id, e);
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Failed to assign TA",
                        ),
                    ));
                }
            }
            info!("TA {} assigned to class {} by {}", ta.id, class.id, user.id);
            invalidate_user_cache(request, &[ta.id]).await;
        }
        Err(e) => {
            error!("Failed to check TA membership: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to assign TA",
                )),
            );
        }
    }

    match storage.list_members(class.id, Some(MemberRole::Ta)).await {
        Ok(teaching_assistants) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TaListResponse {
                teaching_assistants,
            },
            "TA assigned successfully",
        ))),
        Err(e) => {
            error!("Failed to list TAs of class {}: {}", class.id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to assign TA",
                )),
            )
        }
    }
}
