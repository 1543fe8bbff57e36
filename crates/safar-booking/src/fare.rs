use serde::{Deserialize, Serialize};

use crate::BookingError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleKind {
    Bike,
    Rickshaw,
    #[default]
    Car,
    CarAc,
}

/// Tariff in PKR.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rates {
    pub base: u32,
    pub per_km: u32,
    pub per_min: u32,
    pub minimum: u32,
}

/// Average city speed used when no duration is known.
pub const CITY_SPEED_KMH: f64 = 24.0;

/// Lowest offer accepted, as a percentage of the estimate.
pub const MIN_OFFER_PERCENT: u32 = 70;

/// Highest offer accepted, as a multiple of the estimate.
pub const MAX_OFFER_MULTIPLE: u32 = 3;

impl VehicleKind {
    pub const ALL: [VehicleKind; 4] = [
        VehicleKind::Bike,
        VehicleKind::Rickshaw,
        VehicleKind::Car,
        VehicleKind::CarAc,
    ];

    pub fn key(self) -> &'static str {
        match self {
            VehicleKind::Bike => "bike",
            VehicleKind::Rickshaw => "rickshaw",
            VehicleKind::Car => "car",
            VehicleKind::CarAc => "car-ac",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key.trim())
    }

    pub fn rates(self) -> Rates {
        match self {
            VehicleKind::Bike => Rates {
                base: 50,
                per_km: 18,
                per_min: 2,
                minimum: 100,
            },
            VehicleKind::Rickshaw => Rates {
                base: 70,
                per_km: 25,
                per_min: 3,
                minimum: 150,
            },
            VehicleKind::Car => Rates {
                base: 120,
                per_km: 38,
                per_min: 5,
                minimum: 250,
            },
            VehicleKind::CarAc => Rates {
                base: 150,
                per_km: 45,
                per_min: 6,
                minimum: 300,
            },
        }
    }

    pub fn seats(self) -> u8 {
        match self {
            VehicleKind::Bike => 1,
            VehicleKind::Rickshaw => 3,
            VehicleKind::Car | VehicleKind::CarAc => 4,
        }
    }
}

pub fn round_to_ten(amount: f64) -> u32 {
    ((amount.max(0.0) / 10.0).round() * 10.0) as u32
}

pub fn estimate_duration_min(distance_km: f64) -> f64 {
    distance_km.max(0.0) * 60.0 / CITY_SPEED_KMH
}

/// base + distance + time, never below the vehicle minimum, rounded to 10 PKR.
pub fn estimate_fare(kind: VehicleKind, distance_km: f64, duration_min: f64) -> u32 {
    let r = kind.rates();
    let raw = r.base as f64
        + r.per_km as f64 * distance_km.max(0.0)
        + r.per_min as f64 * duration_min.max(0.0);
    round_to_ten(raw).max(r.minimum)
}

/// 70% of the estimate, rounded up to the next 10 PKR.
pub fn minimum_offer(estimate: u32) -> u32 {
    let floor = u64::from(estimate) * u64::from(MIN_OFFER_PERCENT);
    u32::try_from(floor.div_ceil(1000) * 10).unwrap_or(u32::MAX)
}

pub fn maximum_offer(estimate: u32) -> u32 {
    estimate.saturating_mul(MAX_OFFER_MULTIPLE)
}

pub fn validate_offer(estimate: u32, offered: u32) -> Result<u32, BookingError> {
    let minimum = minimum_offer(estimate);
    if offered < minimum {
        return Err(BookingError::OfferTooLow { offered, minimum });
    }
    let maximum = maximum_offer(estimate);
    if offered > maximum {
        return Err(BookingError::OfferTooHigh { offered, maximum });
    }
    Ok(offered)
}
