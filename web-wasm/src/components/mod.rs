pub mod analyze_button;
pub mod disclaimer;
pub mod food_name_input;
pub mod header;
pub mod result_card;
pub mod upload_area;
