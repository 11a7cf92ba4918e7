pub mod app;
pub mod home_page;
pub mod loan_card;
pub mod loan_list;
pub mod register_screen;
pub mod toast;

pub use app::App;
