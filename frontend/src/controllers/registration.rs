use crate::{
    api::{ApiClient, ApiError, NewUser},
    config::routes,
    controllers::form::{Completion, FormFlow},
    state::session::SessionTokenStore,
    validation::{fields, FormFields, RuleSet},
};

pub const CREATED_NOTICE: &str = "Usuario creado exitosamente!";
pub const MANUAL_LOGIN_NOTICE: &str =
    "Usuario creado exitosamente, pero no se pudo iniciar sesión automáticamente. Inicia sesión con tu DNI y contraseña.";

/// Creates the account, then signs the new user in. When the backend does
/// not hand back a token, one is requested with the email and password.
pub struct RegistrationFlow {
    client: ApiClient,
    session: SessionTokenStore,
    rules: RuleSet,
}

impl RegistrationFlow {
    pub fn new(client: ApiClient, session: SessionTokenStore) -> Self {
        Self {
            client,
            session,
            rules: RuleSet::registration(),
        }
    }

    async fn sign_in(&self, user: &NewUser, token: Option<String>) -> Result<(), ApiError> {
        let token = match token {
            Some(token) => token,
            None => {
                self.client
                    .issue_token(&user.email, &user.password)
                    .await?
                    .access_token
            }
        };
        self.session.set(&token)
    }
}

pub fn new_user(fields: &FormFields) -> NewUser {
    NewUser {
        nombre: fields.trimmed(fields::NOMBRE),
        apellido: fields.trimmed(fields::APELLIDO),
        dni: fields.get(fields::DNI).to_string(),
        cuil_cuit: fields.trimmed(fields::CUIL_CUIT),
        email: fields.trimmed(fields::EMAIL),
        telefono: fields.trimmed(fields::TELEFONO),
        password: fields.get(fields::PASSWORD).to_string(),
    }
}

impl FormFlow for RegistrationFlow {
    fn rules(&self) -> &RuleSet {
        &self.rules
    }

    async fn submit(&self, fields: &FormFields) -> Result<Completion, ApiError> {
        let user = new_user(fields);
        let created = self
            .client
            .register(&user)
            .await
            .map_err(|err| err.prefixed("Error al crear usuario"))?;
        log::info!("account created (id {:?})", created.id);

        let token = created.session_token().map(str::to_string);
        match self.sign_in(&user, token).await {
            Ok(()) => Ok(Completion::redirect(CREATED_NOTICE, routes::RESERVATIONS)),
            Err(err) => {
                // The account exists; only the automatic sign-in is lost.
                log::warn!("automatic sign-in after registration failed: {err}");
                self.session.clear();
                Ok(Completion::stay(MANUAL_LOGIN_NOTICE))
            }
        }
    }
}
