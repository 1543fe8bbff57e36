use crate::{BookingError, VehicleKind, round_to_ten};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RentalPackage {
    pub id: &'static str,
    pub hours: u32,
    pub included_km: u32,
    /// Car price in PKR; other vehicles scale by [`vehicle_factor`].
    pub base_price: u32,
}

pub const PACKAGES: &[RentalPackage] = &[
    RentalPackage {
        id: "2h",
        hours: 2,
        included_km: 20,
        base_price: 1500,
    },
    RentalPackage {
        id: "4h",
        hours: 4,
        included_km: 40,
        base_price: 2800,
    },
    RentalPackage {
        id: "8h",
        hours: 8,
        included_km: 80,
        base_price: 5200,
    },
    RentalPackage {
        id: "12h",
        hours: 12,
        included_km: 120,
        base_price: 7500,
    },
];

/// Percent of the car price.
pub fn vehicle_factor(kind: VehicleKind) -> u32 {
    match kind {
        VehicleKind::Bike => 45,
        VehicleKind::Rickshaw => 60,
        VehicleKind::Car => 100,
        VehicleKind::CarAc => 125,
    }
}

pub fn find_package(id: &str) -> Result<&'static RentalPackage, BookingError> {
    PACKAGES
        .iter()
        .find(|p| p.id == id.trim())
        .ok_or_else(|| BookingError::UnknownPackage(id.to_string()))
}

impl RentalPackage {
    pub fn price(&self, kind: VehicleKind) -> u32 {
        round_to_ten(self.base_price as f64 * vehicle_factor(kind) as f64 / 100.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RentalBooking {
    pub package: RentalPackage,
    pub vehicle: VehicleKind,
    pub price: u32,
}

pub fn book(package_id: &str, vehicle: VehicleKind) -> Result<RentalBooking, BookingError> {
    let package = *find_package(package_id)?;
    let price = package.price(vehicle);
    log::info!("rental booked: {} {} for {price} PKR", package.id, vehicle.key());
    Ok(RentalBooking {
        package,
        vehicle,
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_scale_by_vehicle() {
        let p = find_package("4h").unwrap();
        assert_eq!(p.price(VehicleKind::Car), 2800);
        assert_eq!(p.price(VehicleKind::CarAc), 3500);
        assert_eq!(p.price(VehicleKind::Bike), 1260);
    }

    #[test]
    fn longer_packages_cost_more() {
        for w in PACKAGES.windows(2) {
            assert!(w[0].price(VehicleKind::Rickshaw) < w[1].price(VehicleKind::Rickshaw));
        }
    }

    #[test]
    fn unknown_package_is_an_error() {
        assert_eq!(
            book("3h", VehicleKind::Car),
            Err(BookingError::UnknownPackage("3h".into()))
        );
    }
}
