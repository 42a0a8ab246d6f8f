use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::QuestionService;
use crate::models::questions::requests::AddQuestionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::classes::fetch_current_user;

pub async fn add_question(
    service: &QuestionService,
    request: &HttpRequest,
    question_data: AddQuestionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match fetch_current_user(&storage, request).await {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let text = question_data.text.trim();
    if text.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::QuestionTextRequired,
            "Question text is required",
        )));
    }

    let Some(class_id) = user.class_id else {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::NotInClass,
            "You are not in a class",
        )));
    };

    // 重复提问预检；并发窗口由 (text, user_id, class_id) 唯一索引兜底，
    // 两条路径对外呈现同一个错误
    match storage.find_question_by_text(class_id, user.id, text).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::QuestionDuplicate,
                "You have already posted this question",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check duplicate question: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::QuestionCreationFailed,
                    "Failed to post question",
                )),
            );
        }
    }

    // 署名缺省为提问者用户名
    let author = question_data
        .author
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .unwrap_or(&user.username);

    match storage
        .create_question(class_id, user.id, text, author)
        .await
    {
        Ok(question) => {
            info!("Question {} posted in class {}", question.id, class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                question,
                "Question posted successfully",
            )))
        }
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(
                ErrorCode::QuestionDuplicate,
                "You have already posted this question",
            ),
        )),
        Err(e) => {
            error!("Failed to create question: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::QuestionCreationFailed,
                    "Failed to post question",
                )),
            )
        }
    }
}
