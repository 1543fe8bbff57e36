use safar_navigation::Screen;
use serde::{Deserialize, Serialize};

/// Identity of a step. Hosts dispatch side effects on this, steps carry none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    RideWelcome,
    RidePickup,
    RideDestination,
    RideVehicle,
    RideFare,
    RideFindDriver,
    RideOffers,
    RideAcceptOffer,
    RideTracking,
    RideFinish,

    DeliveryWelcome,
    DeliveryRoute,
    DeliveryPackage,
    DeliveryRecipient,
    DeliverySubmit,
    DeliveryTracking,

    ShopsWelcome,
    ShopsBrowse,
    ShopsMenu,
    ShopsAddToCart,
    ShopsCart,
    ShopsCheckout,
    ShopsOrderPlaced,
}

/// What the popup points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Element id, without `#`.
    Id(&'static str),
    /// Any other selector, verbatim.
    Selector(&'static str),
}

impl Target {
    /// Selector text, `#id` for ids.
    pub fn selector(&self) -> String {
        match self {
            Target::Id(id) => format!("#{id}"),
            Target::Selector(s) => (*s).to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Top,
    Bottom,
    Left,
    Right,
    #[default]
    Center,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorialStep {
    pub id: StepId,
    pub screen: Screen,
    pub target: Option<Target>,
    pub placement: Placement,
    pub title_key: &'static str,
    pub description_key: &'static str,
}
