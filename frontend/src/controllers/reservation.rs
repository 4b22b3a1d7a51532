use crate::{
    api::{ApiClient, ApiError, NewReservation, Reservation},
    controllers::form::{Completion, FormFlow},
    state::session::{SessionCheck, SessionTokenStore},
    utils::time::parse_form_date,
    validation::{fields, FormFields, RuleSet},
};

pub const SENT_NOTICE: &str = "Reserva enviada. La administración te contactará vía WhatsApp.";

pub struct ReservationFlow {
    client: ApiClient,
    session: SessionTokenStore,
    rules: RuleSet,
}

impl ReservationFlow {
    pub fn new(client: ApiClient, session: SessionTokenStore) -> Self {
        Self {
            client,
            session,
            rules: RuleSet::reservation(),
        }
    }
}

/// Builds the request body from already validated fields.
pub fn new_reservation(fields: &FormFields) -> Result<NewReservation, ApiError> {
    let date = |name: &str| {
        parse_form_date(fields.get(name))
            .ok_or_else(|| ApiError::validation(format!("Fecha inválida: {name}")))
    };
    let rooms = fields
        .get(fields::ROOMS)
        .trim()
        .parse::<u8>()
        .map_err(|_| ApiError::validation("Cantidad de habitaciones inválida"))?;
    Ok(NewReservation {
        fecha_check_in: date(fields::CHECK_IN)?,
        fecha_check_out: date(fields::CHECK_OUT)?,
        cantidad_habitaciones: rooms,
    })
}

impl FormFlow for ReservationFlow {
    fn rules(&self) -> &RuleSet {
        &self.rules
    }

    fn requires_session(&self) -> bool {
        true
    }

    async fn submit(&self, fields: &FormFields) -> Result<Completion, ApiError> {
        let token = self
            .session
            .get()
            .ok_or_else(|| ApiError::auth("Debes iniciar sesión para continuar"))?;
        let reservation = new_reservation(fields)?;
        let created = self.client.create_reservation(&token, &reservation).await?;
        log::info!("reservation {} created", created.id);
        Ok(Completion::stay(SENT_NOTICE))
    }
}

/// Loads the signed-in user's reservations. `Err` carries how the session
/// ended up: `LoginRequired` means the token is gone and nothing else should
/// be requested.
pub async fn load_reservations(
    client: &ApiClient,
    session: &SessionTokenStore,
) -> Result<Vec<Reservation>, SessionCheck> {
    session.load_reservations(client).await
}
