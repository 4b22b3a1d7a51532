use super::{
    client::ApiClient,
    types::{ApiError, NewReservation, Reservation},
};

impl ApiClient {
    pub async fn list_reservations(&self, token: &str) -> Result<Vec<Reservation>, ApiError> {
        self.get(&self.endpoints().reservations, Some(token)).await
    }

    pub async fn create_reservation(
        &self,
        token: &str,
        reservation: &NewReservation,
    ) -> Result<Reservation, ApiError> {
        self.post_json(&self.endpoints().reservations, reservation, Some(token))
            .await
    }
}
