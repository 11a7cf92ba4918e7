pub mod api_client;
pub mod loan_service;
pub mod token_store;

pub use api_client::ApiClient;
pub use loan_service::normalize_loan_list;
pub use token_store::TokenStore;
