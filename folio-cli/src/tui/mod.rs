//! Interactive terminal portfolio
//!
//! - Header nav (Home / Projects / About / Contact) with a live clock
//! - Mouse hover drives a glow on nav items, filter pills, cards, panels and buttons
//! - `m` flips the reduced-motion preference while running
//! - Contact form with validation, about-page disclosure, scroll parallax backdrop

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use terminal::run;
