use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{ClassService, fetch_current_user};
use crate::models::classes::{
    entities::{MemberInfo, MemberRole},
    responses::ClassDetailResponse,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_my_class(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match fetch_current_user(&storage, request).await {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let Some(class_id) = user.class_id else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "You are not in a class",
        )));
    };

    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
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
                    "Failed to fetch class",
                )),
            );
        }
    };

    // 解析教师与成员为 {id, username} 展示形式
    let teacher = match storage.get_user_by_id(class.teacher_id).await {
        Ok(Some(t)) => MemberInfo {
            id: t.id,
            username: t.username,
        },
        Ok(None) => MemberInfo {
            id: class.teacher_id,
            username: String::new(),
        },
        Err(e) => {
            error!("Failed to fetch teacher {}: {}", class.teacher_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to fetch class",
                )),
            );
        }
    };

    let students = match storage.list_members(class.id, Some(MemberRole::Student)).await {
        Ok(members) => members,
        Err(e) => {
            error!("Failed to list students of class {}: {}", class.id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to fetch class members",
                )),
            );
        }
    };

    let teaching_assistants = match storage.list_members(class.id, Some(MemberRole::Ta)).await {
        Ok(members) => members,
        Err(e) => {
            error!("Failed to list TAs of class {}: {}", class.id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to fetch class members",
                )),
            );
        }
    };

    let response = ClassDetailResponse {
        id: class.id,
        class_name: class.class_name,
        subject: class.subject,
        class_code: class.class_code,
        teacher,
        student_count: students.len(),
        students,
        teaching_assistants,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Class retrieved successfully",
    )))
}
