use reqwest::Method;

use super::{
    client::{encode_path_segment, ApiClient},
    types::{ApiError, CreateStudent, MessageResponse, Student, UpdateStudent},
};

impl ApiClient {
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let builder = self.request(Method::GET, "/students").await;
        self.send_authed(builder).await
    }

    pub async fn get_student(&self, id: &str) -> Result<Student, ApiError> {
        let path = format!("/students/{}", encode_path_segment(id));
        let builder = self.request(Method::GET, &path).await;
        self.send_authed(builder).await
    }

    pub async fn create_student(&self, payload: &CreateStudent) -> Result<MessageResponse, ApiError> {
        let builder = self.request(Method::POST, "/students").await.json(payload);
        self.send_authed(builder).await
    }

    pub async fn update_student(
        &self,
        id: &str,
        payload: &UpdateStudent,
    ) -> Result<MessageResponse, ApiError> {
        let path = format!("/students/{}", encode_path_segment(id));
        let builder = self.request(Method::PUT, &path).await.json(payload);
        self.send_authed(builder).await
    }

    pub async fn delete_student(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let path = format!("/students/{}", encode_path_segment(id));
        let builder = self.request(Method::DELETE, &path).await;
        self.send_authed(builder).await
    }
}
