pub mod use_auth;
pub mod use_loans;
pub mod use_toasts;

pub use use_auth::{use_auth, UseAuthHandle};
pub use use_loans::{use_loans, NewLoanInput, UseLoansHandle};
pub use use_toasts::{use_toasts, Toast, ToastKind, UseToastsHandle};
