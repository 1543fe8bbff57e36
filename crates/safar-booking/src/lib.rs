//! Mock booking flows: ride fares and offers, parcels, rentals and shop orders.
//!
//! Nothing here talks to a server. Drivers, shops and prices are fixed tables;
//! anything random (offers, tracking ids) takes an explicit `Rng` so callers can
//! seed it.
//!
//! ```
//! use safar_booking::{VehicleKind, estimate_fare, minimum_offer};
//!
//! let fare = estimate_fare(VehicleKind::Car, 4.0, 10.0);
//! assert_eq!(fare, 320);
//! assert_eq!(minimum_offer(fare), 230);
//! ```

pub mod error;
pub mod fare;
pub mod ids;
pub mod parcel;
pub mod rental;
pub mod ride;
pub mod shop;

pub use error::*;
pub use fare::*;
pub use ids::*;
pub use parcel::*;
pub use rental::*;
pub use ride::*;
pub use shop::*;
