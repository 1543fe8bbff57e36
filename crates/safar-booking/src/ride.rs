use rand::Rng;
use rand::seq::SliceRandom;

use crate::{BookingError, VehicleKind, estimate_duration_min, estimate_fare, validate_offer};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Driver {
    pub name: &'static str,
    pub rating: f32,
    pub vehicle: &'static str,
    pub plate: &'static str,
    pub phone: &'static str,
}

const fn driver(
    name: &'static str,
    rating: f32,
    vehicle: &'static str,
    plate: &'static str,
    phone: &'static str,
) -> Driver {
    Driver {
        name,
        rating,
        vehicle,
        plate,
        phone,
    }
}

pub const ROSTER: &[Driver] = &[
    driver("Muhammad Ali", 4.9, "Suzuki Alto, white", "LEA-1234", "+92 300 1234567"),
    driver("Ahmed Raza", 4.8, "Toyota Corolla, silver", "LEB-5521", "+92 301 7654321"),
    driver("Bilal Khan", 4.7, "Honda City, black", "LEC-9087", "+92 321 4455667"),
    driver("Usman Tariq", 4.6, "Suzuki Cultus, grey", "LED-3310", "+92 333 9988776"),
    driver("Hamza Sheikh", 4.9, "Toyota Yaris, white", "LEE-7402", "+92 345 1122334"),
    driver("Imran Qureshi", 4.5, "Suzuki Wagon R, blue", "LEF-6619", "+92 312 5566778"),
];

/// The driver every guided-tour ride is assigned to.
pub const TUTORIAL_DRIVER: Driver = ROSTER[0];
pub const TUTORIAL_FARE: u32 = 320;

pub const CANCEL_REASONS: &[&str] = &[
    "Driver is taking too long",
    "Changed my plans",
    "Booked by mistake",
    "Found another ride",
    "Other",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriverOffer {
    pub driver: Driver,
    pub fare: u32,
    pub eta_min: u32,
}

/// Up to `count` offers from distinct drivers, cheapest (then soonest) first.
/// Drivers counter with the requested fare or up to 40 PKR more.
pub fn generate_offers(rng: &mut impl Rng, requested_fare: u32, count: usize) -> Vec<DriverOffer> {
    let mut order: Vec<usize> = (0..ROSTER.len()).collect();
    order.shuffle(rng);
    let mut offers: Vec<DriverOffer> = order
        .into_iter()
        .take(count)
        .map(|i| DriverOffer {
            driver: ROSTER[i],
            fare: requested_fare.saturating_add(10 * rng.random_range(0..=4u32)),
            eta_min: rng.random_range(2..=9),
        })
        .collect();
    offers.sort_by_key(|o| (o.fare, o.eta_min));
    offers
}

#[derive(Clone, Debug, PartialEq)]
pub struct RideRequest {
    pub pickup: String,
    pub destination: String,
    pub vehicle: VehicleKind,
    pub distance_km: f64,
    pub duration_min: f64,
    pub offered_fare: u32,
}

impl RideRequest {
    /// Starts with the estimated fare as the offer.
    pub fn new(
        pickup: impl Into<String>,
        destination: impl Into<String>,
        vehicle: VehicleKind,
        distance_km: f64,
    ) -> Result<Self, BookingError> {
        let (pickup, destination) = (pickup.into(), destination.into());
        if pickup.trim().is_empty() || destination.trim().is_empty() {
            return Err(BookingError::MissingRoute);
        }
        let duration_min = estimate_duration_min(distance_km);
        Ok(Self {
            offered_fare: estimate_fare(vehicle, distance_km, duration_min),
            pickup,
            destination,
            vehicle,
            distance_km,
            duration_min,
        })
    }

    pub fn estimate(&self) -> u32 {
        estimate_fare(self.vehicle, self.distance_km, self.duration_min)
    }

    pub fn set_vehicle(&mut self, vehicle: VehicleKind) {
        self.vehicle = vehicle;
        self.offered_fare = self.estimate();
    }

    pub fn offer(&mut self, fare: u32) -> Result<(), BookingError> {
        self.offered_fare = validate_offer(self.estimate(), fare)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RideStatus {
    Searching,
    DriverAssigned,
    Arrived,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ride {
    pub request: RideRequest,
    pub driver: Option<Driver>,
    pub fare: u32,
    pub eta_min: u32,
    pub status: RideStatus,
    pub cancel_reason: Option<String>,
}

impl Ride {
    pub fn searching(request: RideRequest) -> Self {
        Self {
            fare: request.offered_fare,
            request,
            driver: None,
            eta_min: 0,
            status: RideStatus::Searching,
            cancel_reason: None,
        }
    }

    fn require(&self, action: &'static str, allowed: &[RideStatus]) -> Result<(), BookingError> {
        if allowed.contains(&self.status) {
            Ok(())
        } else {
            Err(BookingError::InvalidRideState {
                action,
                status: self.status,
            })
        }
    }

    pub fn accept(&mut self, offer: &DriverOffer) -> Result<(), BookingError> {
        self.require("accept an offer for", &[RideStatus::Searching])?;
        self.driver = Some(offer.driver);
        self.fare = offer.fare;
        self.eta_min = offer.eta_min;
        self.status = RideStatus::DriverAssigned;
        log::info!("ride accepted: {} for {} PKR", offer.driver.name, offer.fare);
        Ok(())
    }

    /// One minute closer; returns true once the driver is at the pickup.
    pub fn tick_eta(&mut self) -> bool {
        if self.status != RideStatus::DriverAssigned {
            return false;
        }
        self.eta_min = self.eta_min.saturating_sub(1);
        self.eta_min == 0
    }

    pub fn arrive(&mut self) -> Result<(), BookingError> {
        self.require("mark arrived", &[RideStatus::DriverAssigned])?;
        self.eta_min = 0;
        self.status = RideStatus::Arrived;
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), BookingError> {
        self.require("start", &[RideStatus::Arrived])?;
        self.status = RideStatus::InProgress;
        Ok(())
    }

    pub fn complete(&mut self) -> Result<(), BookingError> {
        self.require("complete", &[RideStatus::InProgress])?;
        self.status = RideStatus::Completed;
        Ok(())
    }

    /// A reason is mandatory; only rides that have not started can be cancelled.
    pub fn cancel(&mut self, reason: Option<&str>) -> Result<(), BookingError> {
        self.require(
            "cancel",
            &[
                RideStatus::Searching,
                RideStatus::DriverAssigned,
                RideStatus::Arrived,
            ],
        )?;
        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or(BookingError::MissingCancellationReason)?;
        self.cancel_reason = Some(reason.to_string());
        self.status = RideStatus::Cancelled;
        log::info!("ride cancelled: {reason}");
        Ok(())
    }
}

/// Request used by the guided tour: a 4 km car ride across Lahore.
pub fn tutorial_request() -> RideRequest {
    RideRequest {
        pickup: "Liberty Market, Gulberg".to_string(),
        destination: "Emporium Mall, Johar Town".to_string(),
        vehicle: VehicleKind::Car,
        distance_km: 4.0,
        duration_min: 10.0,
        offered_fare: TUTORIAL_FARE,
    }
}

pub fn tutorial_offers() -> Vec<DriverOffer> {
    vec![
        DriverOffer {
            driver: TUTORIAL_DRIVER,
            fare: TUTORIAL_FARE,
            eta_min: 3,
        },
        DriverOffer {
            driver: ROSTER[1],
            fare: TUTORIAL_FARE + 20,
            eta_min: 5,
        },
        DriverOffer {
            driver: ROSTER[2],
            fare: TUTORIAL_FARE + 40,
            eta_min: 4,
        },
    ]
}

/// Ride shown on the tracking screen during the guided tour.
pub fn tutorial_ride() -> Ride {
    let mut ride = Ride::searching(tutorial_request());
    ride.driver = Some(TUTORIAL_DRIVER);
    ride.fare = TUTORIAL_FARE;
    ride.eta_min = 3;
    ride.status = RideStatus::DriverAssigned;
    ride
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn empty_route_is_rejected() {
        assert_eq!(
            RideRequest::new("Gulberg", "  ", VehicleKind::Bike, 3.0),
            Err(BookingError::MissingRoute)
        );
    }

    #[test]
    fn offers_are_distinct_and_sorted() {
        let mut rng = StdRng::seed_from_u64(42);
        let offers = generate_offers(&mut rng, 300, 4);
        assert_eq!(offers.len(), 4);
        for w in offers.windows(2) {
            assert!(w[0].fare <= w[1].fare);
        }
        let mut names: Vec<_> = offers.iter().map(|o| o.driver.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
        assert!(offers.iter().all(|o| (300..=340).contains(&o.fare)));
    }

    #[test]
    fn lifecycle_runs_in_order() {
        let req = RideRequest::new("A", "B", VehicleKind::Rickshaw, 5.0).unwrap();
        let mut ride = Ride::searching(req);
        assert!(ride.start().is_err());
        ride.accept(&tutorial_offers()[1]).unwrap();
        assert_eq!(ride.fare, 340);
        ride.arrive().unwrap();
        ride.start().unwrap();
        assert!(ride.cancel(Some("Changed my plans")).is_err());
        ride.complete().unwrap();
        assert_eq!(ride.status, RideStatus::Completed);
    }

    #[test]
    fn eta_counts_down_to_arrival() {
        let mut ride = tutorial_ride();
        assert!(!ride.tick_eta());
        assert!(!ride.tick_eta());
        assert!(ride.tick_eta());
        assert_eq!(ride.eta_min, 0);
    }

    #[test]
    fn cancelling_needs_a_reason() {
        let mut ride = tutorial_ride();
        assert_eq!(ride.cancel(None), Err(BookingError::MissingCancellationReason));
        assert_eq!(ride.cancel(Some("   ")), Err(BookingError::MissingCancellationReason));
        assert_eq!(ride.status, RideStatus::DriverAssigned);
        ride.cancel(Some(CANCEL_REASONS[1])).unwrap();
        assert_eq!(ride.cancel_reason.as_deref(), Some("Changed my plans"));
    }

    #[test]
    fn tutorial_ride_is_muhammad_ali_for_320() {
        let ride = tutorial_ride();
        assert_eq!(ride.driver.map(|d| d.name), Some("Muhammad Ali"));
        assert_eq!(ride.fare, 320);
        assert_eq!(ride.request.estimate(), 320);
    }

    #[test]
    fn offer_must_clear_the_minimum() {
        let mut req = tutorial_request();
        assert!(req.offer(150).is_err());
        assert_eq!(req.offered_fare, 320);
        req.offer(280).unwrap();
        assert_eq!(req.offered_fare, 280);
        assert!(matches!(req.offer(u32::MAX), Err(BookingError::OfferTooHigh { .. })));
        assert_eq!(req.offered_fare, 280);
    }

    #[test]
    fn counter_offers_saturate_at_the_top() {
        let mut rng = StdRng::seed_from_u64(7);
        let offers = generate_offers(&mut rng, u32::MAX - 5, 3);
        assert!(offers.iter().all(|o| o.fare >= u32::MAX - 5));
    }
}
