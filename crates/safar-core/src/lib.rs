//! # Safar core
//!
//! Everything the app shell needs that is not a screen, a flow or a booking:
//!
//! - `Color` and the colorblind transform engine ([`colorblind`]).
//! - `Signal<T>`: observable values with subscribers.
//! - `Scope` / `Dispose`: cleanups tied to the lifetime of a screen.
//! - `EventBus<E>`: typed, queued messages owned by the composition root.
//! - `Timers<E>`: fixed-delay and periodic timers polled with an explicit clock.
//! - `PreferenceStore`: typed preferences over a key/value storage.
//! - `Language` and the string catalog.
//!
//! ## Signals
//!
//! ```rust
//! use safar_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Scopes
//!
//! A scope collects cleanups and runs them when it is disposed. The navigator
//! gives every back-stack entry its own scope, so anything a screen starts
//! (timers, highlights) stops when the screen is popped:
//!
//! ```rust
//! use safar_core::*;
//!
//! let screen = Scope::new();
//! screen.run(|| {
//!     scoped_effect(|| {
//!         log::info!("searching for drivers");
//!         Box::new(|| log::info!("search cancelled"))
//!     });
//! });
//! screen.dispose();
//! ```

pub mod color;
pub mod colorblind;
pub mod device;
pub mod effects;
pub mod error;
pub mod events;
pub mod geometry;
pub mod locale;
pub mod prelude;
pub mod scope;
pub mod signal;
pub mod storage;
pub mod tests;
pub mod timers;

pub use color::*;
pub use colorblind::*;
pub use device::*;
pub use effects::*;
pub use error::*;
pub use events::*;
pub use geometry::*;
pub use locale::*;
pub use scope::*;
pub use signal::*;
pub use storage::*;
pub use timers::*;
