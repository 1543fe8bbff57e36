use thiserror::Error;

use crate::{MissingFields, RideStatus};

/// Validation failures. The app shows these as blocking alerts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BookingError {
    #[error("pickup and destination are required")]
    MissingRoute,
    #[error("offer of {offered} is below the minimum of {minimum}")]
    OfferTooLow { offered: u32, minimum: u32 },
    #[error("offer of {offered} is above the maximum of {maximum}")]
    OfferTooHigh { offered: u32, maximum: u32 },
    #[error("cannot {action} a ride that is {status:?}")]
    InvalidRideState {
        action: &'static str,
        status: RideStatus,
    },
    #[error("there is no active ride")]
    NoActiveRide,
    #[error("no driver offer at position {0}")]
    UnknownOffer(usize),
    #[error("a cancellation reason is required")]
    MissingCancellationReason,
    #[error("missing required fields: {}", .0.names().join(", "))]
    MissingFields(MissingFields),
    #[error("weight {0:?} is not a positive number of kilograms up to {max}", max = crate::MAX_PARCEL_KG)]
    InvalidWeight(String),
    #[error("the cart is empty")]
    EmptyCart,
    #[error("a delivery address is required")]
    MissingAddress,
    #[error("unknown item {0}")]
    UnknownItem(String),
    #[error("unknown rental package {0}")]
    UnknownPackage(String),
    #[error("no rental package has been booked")]
    NoRental,
    #[error("current location is unavailable")]
    LocationUnavailable,
}

impl BookingError {
    /// Catalog key of the alert shown for this error.
    pub fn alert_key(&self) -> &'static str {
        match self {
            BookingError::MissingRoute => "alert.ride.route",
            BookingError::OfferTooLow { .. } => "alert.ride.offer",
            BookingError::OfferTooHigh { .. } => "alert.ride.offer.high",
            BookingError::InvalidRideState { .. }
            | BookingError::NoActiveRide
            | BookingError::UnknownOffer(_) => "alert.ride.state",
            BookingError::MissingCancellationReason => "alert.cancel.reason",
            BookingError::MissingFields(_) => "alert.parcel.missing",
            BookingError::InvalidWeight(_) => "alert.parcel.weight",
            BookingError::EmptyCart => "alert.cart.empty",
            BookingError::MissingAddress => "alert.cart.address",
            BookingError::UnknownItem(_) => "alert.shop.unknown",
            BookingError::UnknownPackage(_) => "alert.rental.package",
            BookingError::NoRental => "alert.rental.none",
            BookingError::LocationUnavailable => "alert.location",
        }
    }
}
