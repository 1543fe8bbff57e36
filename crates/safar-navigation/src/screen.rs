use serde::{Deserialize, Serialize};

/// Every screen the app can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    LanguageSelect,
    Home,
    FindingDriver,
    DriverOffers,
    RideTracking,
    RideCompleted,
    CancelRide,
    ParcelDetails,
    OrderPlaced,
    Rentals,
    RentalConfirm,
    Shops,
    ShopDetail,
    Cart,
    Checkout,
    Help,
    Settings,
    Accessibility,
}

impl Screen {
    pub const ALL: [Screen; 18] = [
        Screen::LanguageSelect,
        Screen::Home,
        Screen::FindingDriver,
        Screen::DriverOffers,
        Screen::RideTracking,
        Screen::RideCompleted,
        Screen::CancelRide,
        Screen::ParcelDetails,
        Screen::OrderPlaced,
        Screen::Rentals,
        Screen::RentalConfirm,
        Screen::Shops,
        Screen::ShopDetail,
        Screen::Cart,
        Screen::Checkout,
        Screen::Help,
        Screen::Settings,
        Screen::Accessibility,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Screen::LanguageSelect => "language-select",
            Screen::Home => "home",
            Screen::FindingDriver => "finding-driver",
            Screen::DriverOffers => "driver-offers",
            Screen::RideTracking => "ride-tracking",
            Screen::RideCompleted => "ride-completed",
            Screen::CancelRide => "cancel-ride",
            Screen::ParcelDetails => "parcel-details",
            Screen::OrderPlaced => "order-placed",
            Screen::Rentals => "rentals",
            Screen::RentalConfirm => "rental-confirm",
            Screen::Shops => "shops",
            Screen::ShopDetail => "shop-detail",
            Screen::Cart => "cart",
            Screen::Checkout => "checkout",
            Screen::Help => "help",
            Screen::Settings => "settings",
            Screen::Accessibility => "accessibility",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Screen> {
        Self::ALL.into_iter().find(|s| s.tag() == tag)
    }

    /// Catalog key of the screen title.
    pub fn title_key(self) -> String {
        format!("screen.{}", self.tag())
    }

    /// Screens reachable by a plain push from `self`.
    pub fn successors(self) -> &'static [Screen] {
        use Screen::*;
        match self {
            LanguageSelect => &[Home],
            Home => &[
                FindingDriver,
                ParcelDetails,
                Rentals,
                Shops,
                Help,
                Settings,
                Accessibility,
            ],
            FindingDriver => &[DriverOffers, CancelRide],
            DriverOffers => &[RideTracking, CancelRide],
            RideTracking => &[RideCompleted, CancelRide, Help],
            RideCompleted => &[Home],
            CancelRide => &[Home],
            ParcelDetails => &[OrderPlaced],
            OrderPlaced => &[Home],
            Rentals => &[RentalConfirm],
            RentalConfirm => &[FindingDriver],
            Shops => &[ShopDetail, Cart],
            ShopDetail => &[Cart],
            Cart => &[Checkout, ShopDetail],
            Checkout => &[OrderPlaced],
            Help => &[Settings, Accessibility],
            Settings => &[Accessibility, LanguageSelect, Help],
            Accessibility => &[],
        }
    }

    pub fn can_push(self, next: Screen) -> bool {
        self.successors().contains(&next)
    }

    /// Shortest chain of pushes leading from `Home` to `self`, excluding `Home`.
    /// `None` for screens that cannot be reached from `Home`.
    pub fn path_from_home(self) -> Option<Vec<Screen>> {
        if self == Screen::Home {
            return Some(Vec::new());
        }
        let mut prev: std::collections::HashMap<Screen, Screen> = Default::default();
        let mut queue = std::collections::VecDeque::from([Screen::Home]);
        while let Some(at) = queue.pop_front() {
            for &next in at.successors() {
                if next == Screen::Home || prev.contains_key(&next) {
                    continue;
                }
                prev.insert(next, at);
                if next == self {
                    let mut path = vec![self];
                    let mut cur = self;
                    while let Some(&p) = prev.get(&cur) {
                        if p == Screen::Home {
                            break;
                        }
                        path.push(p);
                        cur = p;
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(next);
            }
        }
        None
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Bottom tabs on the home screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeTab {
    #[default]
    Ride,
    Delivery,
    Shops,
    Rentals,
}

impl HomeTab {
    pub fn key(self) -> &'static str {
        match self {
            HomeTab::Ride => "ride",
            HomeTab::Delivery => "delivery",
            HomeTab::Shops => "shops",
            HomeTab::Rentals => "rentals",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_and_match_serde() {
        for s in Screen::ALL {
            assert_eq!(Screen::from_tag(s.tag()), Some(s));
            assert_eq!(serde_json::to_string(&s).unwrap(), format!("\"{}\"", s.tag()));
        }
    }

    #[test]
    fn paths_follow_the_table() {
        assert_eq!(
            Screen::DriverOffers.path_from_home(),
            Some(vec![Screen::FindingDriver, Screen::DriverOffers])
        );
        assert_eq!(
            Screen::Checkout.path_from_home(),
            Some(vec![Screen::Shops, Screen::Cart, Screen::Checkout])
        );
        assert_eq!(Screen::LanguageSelect.path_from_home(), Some(vec![Screen::Settings, Screen::LanguageSelect]));
        for s in Screen::ALL {
            let path = s.path_from_home().expect("every screen is reachable from home");
            let mut at = Screen::Home;
            for step in path {
                assert!(at.can_push(step), "{at} -> {step}");
                at = step;
            }
        }
    }
}
