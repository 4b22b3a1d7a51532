use super::{
    client::ApiClient,
    types::{ApiError, MessageResponse, UserSummary, UserUpdate},
};

impl ApiClient {
    pub async fn list_users(&self, token: Option<&str>) -> Result<Vec<UserSummary>, ApiError> {
        self.get(&self.endpoints().users, token).await
    }

    pub async fn update_user(
        &self,
        id: i64,
        update: &UserUpdate,
        token: Option<&str>,
    ) -> Result<MessageResponse, ApiError> {
        self.put(&self.endpoints().user(id), update, token).await
    }

    pub async fn delete_user(&self, id: i64, token: Option<&str>) -> Result<MessageResponse, ApiError> {
        self.delete(&self.endpoints().user(id), token).await
    }
}
