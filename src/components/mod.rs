pub mod date_saver;
pub mod feature_list;
pub mod footer;
pub mod hero;
pub mod product_card;
pub mod saved_date_card;
pub mod testimonials;
