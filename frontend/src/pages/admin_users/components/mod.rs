pub mod edit_modal;
pub mod table;
