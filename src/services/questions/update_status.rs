use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::QuestionService;
use crate::models::questions::requests::UpdateQuestionStatusRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{Action, authorize, same_class};
use crate::services::classes::fetch_current_user;

/// 问题状态流转，教师与助教可用。
/// 目标状态在请求边界已由类型化枚举校验。
pub async fn update_status(
    service: &QuestionService,
    request: &HttpRequest,
    question_id: i64,
    status_data: UpdateQuestionStatusRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match fetch_current_user(&storage, request).await {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if !authorize(&user.role, Action::TriageQuestion) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::RoleDenied,
            "Only teachers and TAs can update question status",
        )));
    }

    let question = match storage.get_question_by_id(question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "Question not found",
            )));
        }
        Err(e) => {
            error!("Failed to fetch question {}: {}", question_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update question status",
                )),
            );
        }
    };

    // 只能处理本班问题
    if !same_class(user.class_id, question.class_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ClassPermissionDenied,
            "This question does not belong to your class",
        )));
    }

    match storage
        .update_question_status(question_id, status_data.status)
        .await
    {
        Ok(Some(question)) => {
            info!(
                "Question {} status set to {} by {}",
                question_id, question.status, user.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                question,
                "Question status updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "Question not found",
        ))),
        Err(e) => {
            error!("Failed to update question {}: {}", question_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update question status",
                )),
            )
        }
    }
}
