pub mod account;
pub mod admin_users;
pub mod home;
pub mod reservations;

pub use account::AccountPage;
pub use admin_users::AdminUsersPage;
pub use home::HomePage;
pub use reservations::ReservationsPage;
