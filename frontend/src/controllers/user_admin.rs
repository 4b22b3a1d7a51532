use crate::{
    api::{ApiClient, ApiError, UserSummary, UserUpdate},
    controllers::form::{Completion, FormFlow},
    state::session::SessionTokenStore,
    validation::{fields, FormFields, RuleSet},
};

pub const UPDATED_NOTICE: &str = "Usuario actualizado exitosamente";
pub const DELETED_NOTICE: &str = "Usuario eliminado exitosamente";

/// Result of an accepted delete: the backend's message and the list fetched
/// after it. A failed re-fetch does not undo the deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDeletion {
    pub message: String,
    pub users: Result<Vec<UserSummary>, ApiError>,
}

#[derive(Clone)]
pub struct UserAdmin {
    client: ApiClient,
    session: SessionTokenStore,
}

impl UserAdmin {
    pub fn new(client: ApiClient, session: SessionTokenStore) -> Self {
        Self { client, session }
    }

    pub async fn load(&self) -> Result<Vec<UserSummary>, ApiError> {
        let token = self.session.get();
        self.client
            .list_users(token.as_deref())
            .await
            .map_err(|err| err.prefixed("Error al cargar usuarios"))
    }

    pub async fn delete(&self, id: i64) -> Result<UserDeletion, ApiError> {
        let token = self.session.get();
        let response = self
            .client
            .delete_user(id, token.as_deref())
            .await
            .map_err(|err| err.prefixed("Error al eliminar usuario"))?;
        let users = self.load().await;
        Ok(UserDeletion {
            message: response
                .message
                .unwrap_or_else(|| DELETED_NOTICE.to_string()),
            users,
        })
    }
}

/// Saves the edit modal. The user id travels as a hidden field.
pub struct UserEditFlow {
    client: ApiClient,
    session: SessionTokenStore,
    rules: RuleSet,
}

impl UserEditFlow {
    pub fn new(client: ApiClient, session: SessionTokenStore) -> Self {
        Self {
            client,
            session,
            rules: RuleSet::user_edit(),
        }
    }
}

pub fn user_update(fields: &FormFields) -> UserUpdate {
    UserUpdate {
        nombre: fields.trimmed(fields::NOMBRE),
        apellido: fields.trimmed(fields::APELLIDO),
        email: fields.trimmed(fields::EMAIL),
    }
}

impl FormFlow for UserEditFlow {
    fn rules(&self) -> &RuleSet {
        &self.rules
    }

    async fn submit(&self, fields: &FormFields) -> Result<Completion, ApiError> {
        let id = fields
            .get(fields::ID)
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::validation("Usuario no seleccionado"))?;
        let token = self.session.get();
        let response = self
            .client
            .update_user(id, &user_update(fields), token.as_deref())
            .await
            .map_err(|err| err.prefixed("Error al actualizar usuario"))?;
        Ok(Completion::stay(
            response
                .message
                .unwrap_or_else(|| UPDATED_NOTICE.to_string()),
        ))
    }
}
