use safar_navigation::Screen;
use serde::{Deserialize, Serialize};

use crate::{Placement, StepId, Target, TutorialStep};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    Ride,
    Delivery,
    Shops,
}

impl Flow {
    pub const ALL: [Flow; 3] = [Flow::Ride, Flow::Delivery, Flow::Shops];

    pub fn key(self) -> &'static str {
        match self {
            Flow::Ride => "ride",
            Flow::Delivery => "delivery",
            Flow::Shops => "shops",
        }
    }

    pub fn from_key(key: &str) -> Option<Flow> {
        Self::ALL.into_iter().find(|f| f.key() == key.trim())
    }

    pub fn steps(self) -> Vec<TutorialStep> {
        let table = match self {
            Flow::Ride => RIDE,
            Flow::Delivery => DELIVERY,
            Flow::Shops => SHOPS,
        };
        table.to_vec()
    }
}

const fn step(
    id: StepId,
    screen: Screen,
    target: Option<Target>,
    placement: Placement,
    title_key: &'static str,
    description_key: &'static str,
) -> TutorialStep {
    TutorialStep {
        id,
        screen,
        target,
        placement,
        title_key,
        description_key,
    }
}

use Placement::{Bottom, Center, Left, Top};

const RIDE: &[TutorialStep] = &[
    step(
        StepId::RideWelcome,
        Screen::Home,
        None,
        Center,
        "tutorial.ride.welcome.title",
        "tutorial.ride.welcome.body",
    ),
    step(
        StepId::RidePickup,
        Screen::Home,
        Some(Target::Id("pickup-input")),
        Bottom,
        "tutorial.ride.pickup.title",
        "tutorial.ride.pickup.body",
    ),
    step(
        StepId::RideDestination,
        Screen::Home,
        Some(Target::Id("destination-input")),
        Bottom,
        "tutorial.ride.destination.title",
        "tutorial.ride.destination.body",
    ),
    step(
        StepId::RideVehicle,
        Screen::Home,
        Some(Target::Id("vehicle-options")),
        Top,
        "tutorial.ride.vehicle.title",
        "tutorial.ride.vehicle.body",
    ),
    step(
        StepId::RideFare,
        Screen::Home,
        Some(Target::Id("fare-input")),
        Top,
        "tutorial.ride.fare.title",
        "tutorial.ride.fare.body",
    ),
    step(
        StepId::RideFindDriver,
        Screen::Home,
        Some(Target::Id("find-driver-button")),
        Top,
        "tutorial.ride.find.title",
        "tutorial.ride.find.body",
    ),
    step(
        StepId::RideOffers,
        Screen::DriverOffers,
        Some(Target::Selector(".driver-offer-list")),
        Bottom,
        "tutorial.ride.offers.title",
        "tutorial.ride.offers.body",
    ),
    step(
        StepId::RideAcceptOffer,
        Screen::DriverOffers,
        Some(Target::Id("accept-offer-0")),
        Bottom,
        "tutorial.ride.accept.title",
        "tutorial.ride.accept.body",
    ),
    step(
        StepId::RideTracking,
        Screen::RideTracking,
        Some(Target::Id("driver-card")),
        Top,
        "tutorial.ride.tracking.title",
        "tutorial.ride.tracking.body",
    ),
    step(
        StepId::RideFinish,
        Screen::RideTracking,
        None,
        Center,
        "tutorial.ride.finish.title",
        "tutorial.ride.finish.body",
    ),
];

const DELIVERY: &[TutorialStep] = &[
    step(
        StepId::DeliveryWelcome,
        Screen::Home,
        Some(Target::Id("tab-delivery")),
        Top,
        "tutorial.delivery.welcome.title",
        "tutorial.delivery.welcome.body",
    ),
    step(
        StepId::DeliveryRoute,
        Screen::ParcelDetails,
        Some(Target::Selector(".parcel-route")),
        Bottom,
        "tutorial.delivery.route.title",
        "tutorial.delivery.route.body",
    ),
    step(
        StepId::DeliveryPackage,
        Screen::ParcelDetails,
        Some(Target::Id("parcel-weight")),
        Bottom,
        "tutorial.delivery.package.title",
        "tutorial.delivery.package.body",
    ),
    step(
        StepId::DeliveryRecipient,
        Screen::ParcelDetails,
        Some(Target::Selector(".parcel-recipient")),
        Top,
        "tutorial.delivery.recipient.title",
        "tutorial.delivery.recipient.body",
    ),
    step(
        StepId::DeliverySubmit,
        Screen::ParcelDetails,
        Some(Target::Id("parcel-submit")),
        Top,
        "tutorial.delivery.submit.title",
        "tutorial.delivery.submit.body",
    ),
    step(
        StepId::DeliveryTracking,
        Screen::OrderPlaced,
        Some(Target::Id("tracking-id")),
        Bottom,
        "tutorial.delivery.tracking.title",
        "tutorial.delivery.tracking.body",
    ),
];

const SHOPS: &[TutorialStep] = &[
    step(
        StepId::ShopsWelcome,
        Screen::Home,
        Some(Target::Id("tab-shops")),
        Top,
        "tutorial.shops.welcome.title",
        "tutorial.shops.welcome.body",
    ),
    step(
        StepId::ShopsBrowse,
        Screen::Shops,
        Some(Target::Selector(".shop-list")),
        Bottom,
        "tutorial.shops.browse.title",
        "tutorial.shops.browse.body",
    ),
    step(
        StepId::ShopsMenu,
        Screen::ShopDetail,
        Some(Target::Selector(".menu-list")),
        Bottom,
        "tutorial.shops.menu.title",
        "tutorial.shops.menu.body",
    ),
    step(
        StepId::ShopsAddToCart,
        Screen::ShopDetail,
        Some(Target::Id("add-item-0")),
        Left,
        "tutorial.shops.add.title",
        "tutorial.shops.add.body",
    ),
    step(
        StepId::ShopsCart,
        Screen::Cart,
        Some(Target::Selector(".cart-lines")),
        Bottom,
        "tutorial.shops.cart.title",
        "tutorial.shops.cart.body",
    ),
    step(
        StepId::ShopsCheckout,
        Screen::Checkout,
        Some(Target::Id("address-input")),
        Bottom,
        "tutorial.shops.checkout.title",
        "tutorial.shops.checkout.body",
    ),
    step(
        StepId::ShopsOrderPlaced,
        Screen::OrderPlaced,
        None,
        Center,
        "tutorial.shops.placed.title",
        "tutorial.shops.placed.body",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ride_flow_has_ten_steps_ending_on_tracking() {
        let steps = Flow::Ride.steps();
        assert_eq!(steps.len(), 10);
        assert_eq!(steps[0].screen, Screen::Home);
        assert_eq!(steps[9].screen, Screen::RideTracking);
    }

    #[test]
    fn step_ids_are_unique_across_flows() {
        let mut ids: Vec<StepId> = Flow::ALL.iter().flat_map(|f| f.steps()).map(|s| s.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn flow_keys_round_trip() {
        for f in Flow::ALL {
            assert_eq!(Flow::from_key(f.key()), Some(f));
        }
        assert_eq!(Flow::from_key("rentals"), None);
    }
}
