pub mod login_form;
pub mod registration_form;
