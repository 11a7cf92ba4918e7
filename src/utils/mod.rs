pub mod cookies;
pub mod format;
pub mod jwt;
pub mod validation;
