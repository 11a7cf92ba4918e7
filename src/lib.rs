// ============================================================================
// LOAN TRACKER - Yew/WASM client
// ============================================================================
// Structure:
// - components: function components (views)
// - hooks: view state + the logic driving it
// - services: HTTP communication, token persistence, response normalization
// - stores: plain state types (session, ledger collections, pending edits)
// - models: wire structures shared with the backend
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
