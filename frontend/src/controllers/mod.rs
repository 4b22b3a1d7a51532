//! Form submission and list loading for each page.

pub mod form;
pub mod login;
pub mod registration;
pub mod reservation;
pub mod user_admin;

pub use form::{Completion, FormController, FormFlow, Phase, SubmitOutcome};
pub use login::LoginFlow;
pub use registration::RegistrationFlow;
pub use reservation::{load_reservations, ReservationFlow};
pub use user_admin::{UserAdmin, UserDeletion, UserEditFlow};
