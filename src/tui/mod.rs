pub mod app;
pub mod screen_trait;
pub mod screens;
pub mod state;
pub mod state_machine;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use app::App;
