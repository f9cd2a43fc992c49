pub mod menu_choice;
pub mod movie;
