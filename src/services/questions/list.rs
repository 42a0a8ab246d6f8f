use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::QuestionService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 本班全部问题，最新在前。所有班级成员可见性一致。
pub async fn list_questions(
    service: &QuestionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let Some(class_id) = user.class_id else {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::NotInClass,
            "You are not in a class",
        )));
    };

    match storage.list_questions(class_id).await {
        Ok(questions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            questions,
            "Questions retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list questions of class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list questions",
                )),
            )
        }
    }
}
