//! # Safar
//!
//! Headless core of the Safar ride, delivery and shops app. [`App`] wires the
//! navigator, the guided tour, mock bookings, preferences and speech together;
//! screens are typed data and rendering is left to whatever embeds it.
//!
//! ```
//! use safar::{App, AppConfig};
//! use safar_navigation::Screen;
//! use safar_tutorial::Flow;
//!
//! let mut app = App::in_memory(AppConfig { seed: Some(1), ..AppConfig::default() });
//! app.start_tutorial();
//! app.select_flow(Flow::Ride);
//! while app.tutorial_next() {}
//! assert_eq!(app.current_screen(), Screen::RideTracking);
//! ```

pub mod app;
pub mod config;
pub mod interpreter;
pub mod layout;


pub use app::{App, AppEvent, AppTimer, POPUP_SIZE, alert_text};
pub use config::{AppConfig, ConfigError};
