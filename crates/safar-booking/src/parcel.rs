use bitflags::bitflags;
use rand::Rng;

use crate::{BookingError, tracking_id};

bitflags! {
    /// Required parcel fields left blank.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MissingFields: u8 {
        const WEIGHT = 1 << 0;
        const RECIPIENT_NAME = 1 << 1;
        const RECIPIENT_PHONE = 1 << 2;
    }
}

impl MissingFields {
    /// Form field names, in form order.
    pub fn names(self) -> Vec<&'static str> {
        self.iter_names()
            .map(|(name, _)| match name {
                "WEIGHT" => "weight",
                "RECIPIENT_NAME" => "recipientName",
                _ => "recipientPhone",
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParcelSize {
    #[default]
    Small,
    Medium,
    Large,
}

/// Charge per started kilogram, in PKR.
pub const PER_KG: u32 = 30;

/// Heaviest parcel a rider will carry.
pub const MAX_PARCEL_KG: f64 = 50.0;

impl ParcelSize {
    pub fn key(self) -> &'static str {
        match self {
            ParcelSize::Small => "small",
            ParcelSize::Medium => "medium",
            ParcelSize::Large => "large",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        [ParcelSize::Small, ParcelSize::Medium, ParcelSize::Large]
            .into_iter()
            .find(|s| s.key() == key.trim())
    }

    pub fn base_price(self) -> u32 {
        match self {
            ParcelSize::Small => 150,
            ParcelSize::Medium => 250,
            ParcelSize::Large => 400,
        }
    }
}

/// Raw form input, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParcelForm {
    pub pickup: String,
    pub dropoff: String,
    pub size: ParcelSize,
    pub weight: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParcelOrder {
    pub tracking_id: String,
    pub pickup: String,
    pub dropoff: String,
    pub size: ParcelSize,
    pub weight_kg: f64,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub notes: Option<String>,
    pub price: u32,
}

pub fn parcel_price(size: ParcelSize, weight_kg: f64) -> u32 {
    let started_kg = weight_kg.max(0.0).ceil() as u32;
    size.base_price().saturating_add(PER_KG.saturating_mul(started_kg))
}

impl ParcelForm {
    pub fn missing(&self) -> MissingFields {
        let mut m = MissingFields::empty();
        m.set(MissingFields::WEIGHT, self.weight.trim().is_empty());
        m.set(MissingFields::RECIPIENT_NAME, self.recipient_name.trim().is_empty());
        m.set(MissingFields::RECIPIENT_PHONE, self.recipient_phone.trim().is_empty());
        m
    }

    /// Checks required fields, then parses the weight.
    pub fn validate(&self) -> Result<f64, BookingError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(BookingError::MissingFields(missing));
        }
        let raw = self.weight.trim();
        match raw.parse::<f64>() {
            Ok(kg) if kg.is_finite() && kg > 0.0 && kg <= MAX_PARCEL_KG => Ok(kg),
            _ => Err(BookingError::InvalidWeight(raw.to_string())),
        }
    }

    pub fn submit(&self, rng: &mut impl Rng) -> Result<ParcelOrder, BookingError> {
        let weight_kg = self.validate()?;
        let notes = Some(self.notes.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        let order = ParcelOrder {
            tracking_id: tracking_id(rng),
            pickup: self.pickup.trim().to_string(),
            dropoff: self.dropoff.trim().to_string(),
            size: self.size,
            weight_kg,
            recipient_name: self.recipient_name.trim().to_string(),
            recipient_phone: self.recipient_phone.trim().to_string(),
            notes,
            price: parcel_price(self.size, weight_kg),
        };
        log::info!("parcel booked: {} ({} PKR)", order.tracking_id, order.price);
        Ok(order)
    }
}

/// Form the guided tour fills in.
pub fn tutorial_parcel() -> ParcelForm {
    ParcelForm {
        pickup: "DHA Phase 5, Lahore".to_string(),
        dropoff: "Model Town, Lahore".to_string(),
        size: ParcelSize::Small,
        weight: "2".to_string(),
        recipient_name: "Ayesha Khan".to_string(),
        recipient_phone: "+92 300 7654321".to_string(),
        notes: String::new(),
    }
}
