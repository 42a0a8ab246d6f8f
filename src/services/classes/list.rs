use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{ClassService, fetch_current_user};
use crate::models::classes::{entities::MemberRole, responses::ClassOverview};
use crate::models::{ApiResponse, ErrorCode};
use crate::policy::{Action, authorize};

/// 教师的全部班级（含历史班级），最新在前
pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match fetch_current_user(&storage, request).await {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    if !authorize(&user.role, Action::ListClasses) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::RoleDenied,
            "Only teachers can list their classes",
        )));
    }

    let classes = match storage.list_classes_by_teacher(user.id).await {
        Ok(classes) => classes,
        Err(e) => {
            error!("Failed to list classes of teacher {}: {}", user.id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list classes",
                )),
            );
        }
    };

    let mut overviews = Vec::with_capacity(classes.len());
    for class in classes {
        let student_count = match storage.count_students(class.id).await {
            Ok(count) => count,
            Err(e) => {
                error!("Failed to count students of class {}: {}", class.id, e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to list classes",
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
                        "Failed to list classes",
                    )),
                );
            }
        };

        overviews.push(ClassOverview {
            id: class.id,
            class_name: class.class_name,
            subject: class.subject,
            class_code: class.class_code,
            student_count,
            is_active: class.is_active,
            teaching_assistants,
            created_at: class.created_at,
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        overviews,
        "Classes retrieved successfully",
    )))
}
