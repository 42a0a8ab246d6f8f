use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireJWT, RequireRole};
use crate::models::classes::requests::{AssignTaRequest, CreateClassRequest, JoinClassRequest};
use crate::models::users::entities::UserRole;
use crate::services::ClassService;

// 懒加载的全局 ClassService 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(class_data.into_inner(), &req)
        .await
}

pub async fn join_class(
    req: HttpRequest,
    join_data: web::Json<JoinClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.join_class(join_data.into_inner(), &req).await
}

pub async fn get_my_class(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_my_class(&req).await
}

pub async fn list_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req).await
}

pub async fn deactivate_class(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .deactivate_class(path.into_inner(), &req)
        .await
}

pub async fn leave_class(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.leave_class(&req).await
}

pub async fn assign_ta(
    req: HttpRequest,
    assign_data: web::Json<AssignTaRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.assign_ta(assign_data.into_inner(), &req).await
}

pub async fn remove_ta(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.remove_ta(path.into_inner(), &req).await
}

// 配置路由
//
// 路由层只做粗粒度角色过滤，动作级裁决在服务层经 policy 模块完成。
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .wrap(RequireJWT)
            .route("/my-class", web::get().to(get_my_class))
            .service(
                web::scope("/join")
                    .wrap(RequireRole::new(&UserRole::Student))
                    .route("", web::post().to(join_class)),
            )
            .service(
                web::scope("/leave")
                    .wrap(RequireRole::new(&UserRole::Student))
                    .route("", web::delete().to(leave_class)),
            )
            .service(
                web::scope("")
                    .wrap(RequireRole::new(&UserRole::Teacher))
                    .route("", web::post().to(create_class))
                    .route("", web::get().to(list_classes))
                    .route("/{class_id}/deactivate", web::patch().to(deactivate_class))
                    .route("/tas", web::post().to(assign_ta))
                    .route("/tas/{ta_id}", web::delete().to(remove_ta)),
            ),
    );
}
