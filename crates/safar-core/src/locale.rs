//! Languages, text direction and the string catalog.
//!
//! Only the keys the core itself renders are carried here: screen titles,
//! tutorial copy and validation alerts. Lookups fall back to English, then to
//! the key itself.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Urdu,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Urdu => "ur",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "ur" | "urdu" => Some(Language::Urdu),
            _ => None,
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::English => TextDirection::Ltr,
            Language::Urdu => TextDirection::Rtl,
        }
    }

    /// Speech synthesis voice tag.
    pub fn voice_tag(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Urdu => "ur-PK",
        }
    }
}

pub fn tr<'a>(lang: Language, key: &'a str) -> &'a str {
    let table = match lang {
        Language::English => EN,
        Language::Urdu => UR,
    };
    lookup(table, key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

const EN: &[(&str, &str)] = &[
    ("screen.language-select", "Choose language"),
    ("screen.home", "Home"),
    ("screen.finding-driver", "Finding a driver"),
    ("screen.driver-offers", "Driver offers"),
    ("screen.ride-tracking", "Your ride"),
    ("screen.ride-completed", "Ride completed"),
    ("screen.cancel-ride", "Cancel ride"),
    ("screen.parcel-details", "Parcel details"),
    ("screen.order-placed", "Order placed"),
    ("screen.rentals", "Rentals"),
    ("screen.rental-confirm", "Confirm rental"),
    ("screen.shops", "Shops"),
    ("screen.shop-detail", "Shop"),
    ("screen.cart", "Cart"),
    ("screen.checkout", "Checkout"),
    ("screen.help", "Help"),
    ("screen.settings", "Settings"),
    ("screen.accessibility", "Accessibility"),
    ("alert.parcel.missing", "Please fill in all required parcel details"),
    ("alert.parcel.weight", "Please enter a valid weight"),
    ("alert.ride.route", "Please enter a pickup point and a destination"),
    ("alert.ride.offer", "Your offer is below the minimum fare"),
    ("alert.ride.offer.high", "Your offer is above the maximum fare"),
    ("alert.ride.state", "That action is not available right now"),
    ("alert.cancel.reason", "Please select a reason for cancelling"),
    ("alert.cart.empty", "Your cart is empty"),
    ("alert.cart.address", "Please enter a delivery address"),
    ("alert.shop.unknown", "That item is not available"),
    ("alert.rental.package", "Please choose a rental package"),
    ("alert.rental.none", "Please book a rental package first"),
    ("alert.location", "We could not find your location. Please enter a pickup point"),
    ("pickup.current", "Current location"),
    ("share.ride.title", "My Safar ride"),
    ("tutorial.select.title", "What would you like to learn?"),
    ("tutorial.next", "Next"),
    ("tutorial.previous", "Back"),
    ("tutorial.finish", "Finish"),
    ("tutorial.ride.welcome.title", "Book a ride"),
    ("tutorial.ride.welcome.body", "Let's book your first ride. It starts on the Ride tab."),
    ("tutorial.ride.pickup.title", "Pickup point"),
    ("tutorial.ride.pickup.body", "We use your current location. Tap to change it."),
    ("tutorial.ride.destination.title", "Where to?"),
    ("tutorial.ride.destination.body", "Enter the place you want to go."),
    ("tutorial.ride.vehicle.title", "Choose a vehicle"),
    ("tutorial.ride.vehicle.body", "Bike, rickshaw or car. Each has its own fare."),
    ("tutorial.ride.fare.title", "Offer your fare"),
    ("tutorial.ride.fare.body", "We suggest a fare. You can offer your own."),
    ("tutorial.ride.find.title", "Find a driver"),
    ("tutorial.ride.find.body", "Your request goes to drivers nearby."),
    ("tutorial.ride.offers.title", "Driver offers"),
    ("tutorial.ride.offers.body", "Drivers answer with their price and arrival time."),
    ("tutorial.ride.accept.title", "Accept an offer"),
    ("tutorial.ride.accept.body", "Pick the offer that suits you."),
    ("tutorial.ride.tracking.title", "Track your driver"),
    ("tutorial.ride.tracking.body", "See who is coming and when they arrive."),
    ("tutorial.ride.finish.title", "You're all set"),
    ("tutorial.ride.finish.body", "Share your trip or call your driver from here."),
    ("tutorial.delivery.welcome.title", "Send a parcel"),
    ("tutorial.delivery.welcome.body", "Deliver anything across town."),
    ("tutorial.delivery.route.title", "Pickup and drop-off"),
    ("tutorial.delivery.route.body", "Tell us where to collect and where to deliver."),
    ("tutorial.delivery.package.title", "Package details"),
    ("tutorial.delivery.package.body", "Choose a size and enter the weight."),
    ("tutorial.delivery.recipient.title", "Recipient"),
    ("tutorial.delivery.recipient.body", "Who receives the parcel and how to reach them."),
    ("tutorial.delivery.submit.title", "Place the order"),
    ("tutorial.delivery.submit.body", "Review and confirm your delivery."),
    ("tutorial.delivery.tracking.title", "Tracking id"),
    ("tutorial.delivery.tracking.body", "Use this id to follow your parcel."),
    ("tutorial.shops.welcome.title", "Order from shops"),
    ("tutorial.shops.welcome.body", "Groceries, food and more from local shops."),
    ("tutorial.shops.browse.title", "Browse shops"),
    ("tutorial.shops.browse.body", "Shops near you, closest first."),
    ("tutorial.shops.menu.title", "Pick items"),
    ("tutorial.shops.menu.body", "Open a shop to see what it sells."),
    ("tutorial.shops.add.title", "Add to cart"),
    ("tutorial.shops.add.body", "Tap plus to add an item."),
    ("tutorial.shops.cart.title", "Your cart"),
    ("tutorial.shops.cart.body", "Change quantities before checking out."),
    ("tutorial.shops.checkout.title", "Checkout"),
    ("tutorial.shops.checkout.body", "Enter the delivery address and confirm."),
    ("tutorial.shops.placed.title", "Order placed"),
    ("tutorial.shops.placed.body", "We'll keep you posted until it arrives."),
];

const UR: &[(&str, &str)] = &[
    ("screen.language-select", "زبان منتخب کریں"),
    ("screen.home", "ہوم"),
    ("screen.finding-driver", "ڈرائیور تلاش کیا جا رہا ہے"),
    ("screen.driver-offers", "ڈرائیوروں کی پیشکشیں"),
    ("screen.ride-tracking", "آپ کی سواری"),
    ("screen.ride-completed", "سواری مکمل"),
    ("screen.cancel-ride", "سواری منسوخ کریں"),
    ("screen.parcel-details", "پارسل کی تفصیلات"),
    ("screen.order-placed", "آرڈر ہو گیا"),
    ("screen.rentals", "کرایہ"),
    ("screen.shops", "دکانیں"),
    ("screen.cart", "ٹوکری"),
    ("screen.help", "مدد"),
    ("screen.settings", "ترتیبات"),
    ("screen.accessibility", "رسائی"),
    ("alert.parcel.missing", "براہ کرم پارسل کی تمام ضروری تفصیلات درج کریں"),
    ("alert.cancel.reason", "براہ کرم منسوخی کی وجہ منتخب کریں"),
    ("alert.cart.empty", "آپ کی ٹوکری خالی ہے"),
    ("pickup.current", "موجودہ مقام"),
    ("tutorial.select.title", "آپ کیا سیکھنا چاہیں گے؟"),
    ("tutorial.next", "اگلا"),
    ("tutorial.previous", "پیچھے"),
    ("tutorial.finish", "ختم"),
    ("tutorial.ride.welcome.title", "سواری بک کریں"),
    ("tutorial.ride.pickup.title", "پک اپ کی جگہ"),
    ("tutorial.ride.destination.title", "کہاں جانا ہے؟"),
    ("tutorial.ride.vehicle.title", "سواری کی قسم منتخب کریں"),
    ("tutorial.ride.fare.title", "اپنا کرایہ پیش کریں"),
    ("tutorial.ride.find.title", "ڈرائیور تلاش کریں"),
    ("tutorial.ride.offers.title", "ڈرائیوروں کی پیشکشیں"),
    ("tutorial.ride.accept.title", "پیشکش قبول کریں"),
    ("tutorial.ride.tracking.title", "اپنے ڈرائیور کو دیکھیں"),
    ("tutorial.ride.finish.title", "سب تیار ہے"),
];
