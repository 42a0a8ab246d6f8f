pub mod add;
pub mod delete;
pub mod list;
pub mod update_status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct QuestionService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuestionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 列出本班问题
    pub async fn list_questions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_questions(self, request).await
    }

    // 提交问题
    pub async fn add_question(
        &self,
        question_data: crate::models::questions::requests::AddQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        add::add_question(self, request, question_data).await
    }

    // 更新问题状态
    pub async fn update_status(
        &self,
        question_id: i64,
        status_data: crate::models::questions::requests::UpdateQuestionStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update_status::update_status(self, request, question_id, status_data).await
    }

    // 删除问题
    pub async fn delete_question(
        &self,
        question_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_question(self, request, question_id).await
    }
}
