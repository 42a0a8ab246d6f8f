use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireJWT, RequireRole};
use crate::models::questions::requests::{AddQuestionRequest, UpdateQuestionStatusRequest};
use crate::models::users::entities::UserRole;
use crate::services::QuestionService;

// 懒加载的全局 QuestionService 实例
static QUESTION_SERVICE: Lazy<QuestionService> = Lazy::new(QuestionService::new_lazy);

pub async fn list_questions(req: HttpRequest) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE.list_questions(&req).await
}

pub async fn add_question(
    req: HttpRequest,
    question_data: web::Json<AddQuestionRequest>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .add_question(question_data.into_inner(), &req)
        .await
}

pub async fn update_status(
    req: HttpRequest,
    path: web::Path<i64>,
    status_data: web::Json<UpdateQuestionStatusRequest>,
) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .update_status(path.into_inner(), status_data.into_inner(), &req)
        .await
}

pub async fn delete_question(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    QUESTION_SERVICE
        .delete_question(path.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_questions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/questions")
            .wrap(RequireJWT)
            .route("", web::get().to(list_questions))
            .route("", web::post().to(add_question))
            .service(
                web::scope("")
                    .wrap(RequireRole::new_any(UserRole::triage_roles()))
                    .route("/{question_id}/status", web::patch().to(update_status))
                    .route("/{question_id}", web::delete().to(delete_question)),
            ),
    );
}
