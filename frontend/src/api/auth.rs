use super::{
    client::ApiClient,
    types::{
        ApiError, CredentialCheck, CredentialCheckResponse, NewUser, RegistrationResponse,
        TokenRequest, TokenResponse,
    },
};

impl ApiClient {
    pub async fn register(&self, user: &NewUser) -> Result<RegistrationResponse, ApiError> {
        self.post_json(&self.endpoints().register, user, None).await
    }

    /// Exchanges credentials for a bearer token (OAuth2 password form).
    pub async fn issue_token(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let request = TokenRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        let response: TokenResponse = self.post_form(&self.endpoints().token, &request).await?;
        if response.access_token.trim().is_empty() {
            return Err(ApiError::api("El servidor no devolvió un token de sesión"));
        }
        Ok(response)
    }

    pub async fn check_credentials(
        &self,
        dni: &str,
        password: &str,
    ) -> Result<CredentialCheckResponse, ApiError> {
        let request = CredentialCheck {
            dni: dni.to_string(),
            password: password.to_string(),
        };
        self.post_json(&self.endpoints().login, &request, None).await
    }
}
