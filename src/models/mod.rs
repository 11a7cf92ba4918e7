pub mod auth;
pub mod loan;

pub use auth::*;
pub use loan::*;
