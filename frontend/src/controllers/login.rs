use crate::{
    api::{ApiClient, ApiError},
    config::routes,
    controllers::form::{Completion, FormFlow},
    state::session::SessionTokenStore,
    validation::{fields, FormFields, RuleSet},
};

pub const UNKNOWN_USER: &str = "Los datos no corresponden a un usuario registrado";
pub const TOKEN_FAILED: &str = "Error al generar token de sesión";
pub const LOGGED_IN_NOTICE: &str = "Inicio de sesión exitoso!";

/// Checks DNI and password, then exchanges the account email for a token.
pub struct LoginFlow {
    client: ApiClient,
    session: SessionTokenStore,
    rules: RuleSet,
}

impl LoginFlow {
    pub fn new(client: ApiClient, session: SessionTokenStore) -> Self {
        Self {
            client,
            session,
            rules: RuleSet::login(),
        }
    }
}

impl FormFlow for LoginFlow {
    fn rules(&self) -> &RuleSet {
        &self.rules
    }

    async fn submit(&self, fields: &FormFields) -> Result<Completion, ApiError> {
        let password = fields.get(fields::PASSWORD);
        let checked = self
            .client
            .check_credentials(fields.get(fields::DNI), password)
            .await
            .map_err(|err| match err.status {
                Some(401) => ApiError::api(UNKNOWN_USER).with_status(Some(401)),
                _ => err,
            })?;

        let token = self
            .client
            .issue_token(&checked.user.email, password)
            .await
            .map_err(|err| err.prefixed(TOKEN_FAILED))?;
        self.session.set(&token.access_token)?;
        Ok(Completion::redirect(LOGGED_IN_NOTICE, routes::RESERVATIONS))
    }
}
