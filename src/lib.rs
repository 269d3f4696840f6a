pub mod form;
pub mod models;
pub mod services;
pub mod tui;
