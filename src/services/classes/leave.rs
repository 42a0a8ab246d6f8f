use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{ClassService, fetch_current_user};
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{Action, authorize};
use crate::services::invalidate_user_cache;

pub async fn leave_class(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match fetch_current_user(&storage, request).await {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if !authorize(&user.role, Action::LeaveClass) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::RoleDenied,
            "Only students can leave a class",
        )));
    }

    let Some(class_id) = user.class_id else {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::NotInClass,
            "You are not in a class",
        )));
    };

    match storage.leave_class(user.id, class_id).await {
        Ok(true) => {
            info!("Student {} left class {}", user.id, class_id);
            invalidate_user_cache(request, &[user.id]).await;
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
                "Left class successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::NotInClass,
            "You are not a member of this class",
        ))),
        Err(e) => {
            error!("Failed to leave class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to leave class",
                )),
            )
        }
    }
}
