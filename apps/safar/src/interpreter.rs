//! Side effects of each tutorial step.
//!
//! Steps are data; this table says what the app does when one becomes active.
//! Every effect list is safe to re-run, because `previous` re-enters steps.

use safar_navigation::{HomeTab, Screen};
use safar_tutorial::StepId;
use smallvec::{SmallVec, smallvec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEffect {
    /// Drop the back stack and start over at this screen.
    Reset(Screen),
    /// Make this screen visible by the shortest legal route.
    Show(Screen),
    SelectTab(HomeTab),
    /// Fill pickup, destination, vehicle and fare with the tour ride.
    PrefillRide,
    /// Present the fixed tour offers.
    MockOffers,
    /// Assign the tour driver at the tour fare.
    MockRide,
    PrefillParcel,
    /// Book the prefilled parcel unless one is already booked.
    PlaceMockParcelOrder,
    SelectShop,
    FillCart,
    /// Check out the tour cart unless an order already exists.
    PlaceMockShopOrder,
}

pub type Effects = SmallVec<[StepEffect; 4]>;

pub fn effects_for(step: StepId) -> Effects {
    use StepEffect::*;
    use StepId::*;
    match step {
        RideWelcome => smallvec![Reset(Screen::Home), SelectTab(HomeTab::Ride)],
        RidePickup | RideDestination | RideVehicle | RideFare | RideFindDriver => {
            smallvec![Show(Screen::Home), SelectTab(HomeTab::Ride), PrefillRide]
        }
        RideOffers | RideAcceptOffer => {
            smallvec![PrefillRide, MockOffers, Show(Screen::DriverOffers)]
        }
        RideTracking | RideFinish => smallvec![PrefillRide, MockRide, Show(Screen::RideTracking)],

        DeliveryWelcome => smallvec![Reset(Screen::Home), SelectTab(HomeTab::Delivery)],
        DeliveryRoute | DeliveryPackage | DeliveryRecipient | DeliverySubmit => {
            smallvec![SelectTab(HomeTab::Delivery), PrefillParcel, Show(Screen::ParcelDetails)]
        }
        DeliveryTracking => smallvec![PrefillParcel, PlaceMockParcelOrder, Show(Screen::OrderPlaced)],

        ShopsWelcome => smallvec![Reset(Screen::Home), SelectTab(HomeTab::Shops)],
        ShopsBrowse => smallvec![SelectTab(HomeTab::Shops), Show(Screen::Shops)],
        ShopsMenu | ShopsAddToCart => smallvec![SelectShop, Show(Screen::ShopDetail)],
        ShopsCart => smallvec![SelectShop, FillCart, Show(Screen::Cart)],
        ShopsCheckout => smallvec![SelectShop, FillCart, Show(Screen::Checkout)],
        ShopsOrderPlaced => smallvec![SelectShop, FillCart, PlaceMockShopOrder, Show(Screen::OrderPlaced)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safar_tutorial::Flow;

    fn lands_on(effects: &Effects) -> Option<Screen> {
        effects.iter().rev().find_map(|e| match e {
            StepEffect::Reset(s) | StepEffect::Show(s) => Some(*s),
            _ => None,
        })
    }

    #[test]
    fn every_step_lands_on_its_own_screen() {
        for flow in Flow::ALL {
            for step in flow.steps() {
                assert_eq!(lands_on(&effects_for(step.id)), Some(step.screen), "{:?}", step.id);
            }
        }
    }

    #[test]
    fn welcome_steps_reset_to_home() {
        for flow in Flow::ALL {
            let first = flow.steps()[0].id;
            assert_eq!(effects_for(first)[0], StepEffect::Reset(Screen::Home));
        }
    }

    #[test]
    fn effect_lists_stay_inline() {
        for flow in Flow::ALL {
            for step in flow.steps() {
                assert!(!effects_for(step.id).spilled());
            }
        }
    }
}
