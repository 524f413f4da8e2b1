use reqwest::Method;

use super::{
    client::ApiClient,
    types::{Analytics, ApiError},
};

impl ApiClient {
    pub async fn get_analytics(&self) -> Result<Analytics, ApiError> {
        let builder = self.request(Method::GET, "/analytics").await;
        self.send_authed(builder).await
    }
}
