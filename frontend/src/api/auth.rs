use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, MessageResponse, ProfileUpdate, SignupRequest, UserResponse},
};
use crate::utils::storage;

impl ApiClient {
    /// Logs in and persists the returned token and user.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let builder = self.request(Method::POST, "/login").await.json(request);
        let response: LoginResponse = self.send_public(builder).await?;
        storage::save_session(&response.token, &response.user).map_err(ApiError::unknown)?;
        Ok(response)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, ApiError> {
        let builder = self.request(Method::POST, "/signup").await.json(request);
        self.send_public(builder).await
    }

    pub async fn get_profile(&self) -> Result<UserResponse, ApiError> {
        let builder = self.request(Method::GET, "/profile").await;
        self.send_authed(builder).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<MessageResponse, ApiError> {
        let builder = self.request(Method::PUT, "/profile").await.json(update);
        self.send_authed(builder).await
    }
}
