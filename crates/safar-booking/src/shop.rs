use rand::Rng;

use crate::{BookingError, order_id};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shop {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub rating: f32,
    pub delivery_min: u32,
    pub menu: &'static [MenuItem],
}

const fn item(id: &'static str, name: &'static str, price: u32) -> MenuItem {
    MenuItem { id, name, price }
}

pub const SHOPS: &[Shop] = &[
    Shop {
        id: "karachi-biryani",
        name: "Karachi Biryani House",
        category: "food",
        rating: 4.7,
        delivery_min: 30,
        menu: &[
            item("chicken-biryani", "Chicken Biryani", 450),
            item("beef-pulao", "Beef Pulao", 520),
            item("raita", "Raita", 80),
            item("kheer", "Kheer", 180),
        ],
    },
    Shop {
        id: "fresh-mart",
        name: "Fresh Mart Grocery",
        category: "grocery",
        rating: 4.5,
        delivery_min: 45,
        menu: &[
            item("milk-1l", "Milk 1L", 280),
            item("eggs-12", "Eggs (dozen)", 360),
            item("atta-5kg", "Atta 5kg", 950),
            item("tea-450g", "Tea 450g", 1150),
        ],
    },
    Shop {
        id: "shifa-pharmacy",
        name: "Shifa Pharmacy",
        category: "pharmacy",
        rating: 4.8,
        delivery_min: 25,
        menu: &[
            item("panadol", "Panadol 20 tabs", 60),
            item("ors", "ORS sachets", 120),
            item("sunblock", "Sunblock SPF 50", 1450),
        ],
    },
];

/// Orders at or above this subtotal ship free.
pub const FREE_DELIVERY_FROM: u32 = 1000;
pub const DELIVERY_FEE: u32 = 99;

pub fn find_shop(id: &str) -> Option<&'static Shop> {
    SHOPS.iter().find(|s| s.id == id)
}

impl Shop {
    pub fn item(&self, id: &str) -> Option<&'static MenuItem> {
        self.menu.iter().find(|i| i.id == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn total(&self) -> u32 {
        self.item.price * self.quantity
    }
}

/// Lines from a single shop. Adding from another shop starts a new cart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    shop: Option<&'static Shop>,
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shop(&self) -> Option<&'static Shop> {
        self.shop
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn add(&mut self, shop: &'static Shop, item_id: &str) -> Result<(), BookingError> {
        let item = *shop
            .item(item_id)
            .ok_or_else(|| BookingError::UnknownItem(item_id.to_string()))?;
        if self.shop.is_some_and(|s| s.id != shop.id) {
            log::debug!("cart: switching to {}, dropping previous lines", shop.id);
            self.lines.clear();
        }
        self.shop = Some(shop);
        match self.lines.iter_mut().find(|l| l.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine { item, quantity: 1 }),
        }
        Ok(())
    }

    /// Removes one unit.
    pub fn remove(&mut self, item_id: &str) -> Result<(), BookingError> {
        let quantity = self
            .lines
            .iter()
            .find(|l| l.item.id == item_id)
            .map(|l| l.quantity)
            .ok_or_else(|| BookingError::UnknownItem(item_id.to_string()))?;
        self.set_quantity(item_id, quantity - 1)
    }

    /// Zero drops the line.
    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) -> Result<(), BookingError> {
        let pos = self
            .lines
            .iter()
            .position(|l| l.item.id == item_id)
            .ok_or_else(|| BookingError::UnknownItem(item_id.to_string()))?;
        if quantity == 0 {
            self.lines.remove(pos);
            if self.lines.is_empty() {
                self.shop = None;
            }
        } else {
            self.lines[pos].quantity = quantity;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.shop = None;
    }

    pub fn subtotal(&self) -> u32 {
        self.lines.iter().map(CartLine::total).sum()
    }

    pub fn delivery_fee(&self) -> u32 {
        if self.is_empty() || self.subtotal() >= FREE_DELIVERY_FROM {
            0
        } else {
            DELIVERY_FEE
        }
    }

    pub fn total(&self) -> u32 {
        self.subtotal() + self.delivery_fee()
    }

    /// Places the order and empties the cart.
    pub fn checkout(&mut self, address: &str, rng: &mut impl Rng) -> Result<ShopOrder, BookingError> {
        let Some(shop) = self.shop.filter(|_| !self.lines.is_empty()) else {
            return Err(BookingError::EmptyCart);
        };
        let address = address.trim();
        if address.is_empty() {
            return Err(BookingError::MissingAddress);
        }
        let order = ShopOrder {
            order_id: order_id(rng),
            shop_name: shop.name,
            subtotal: self.subtotal(),
            delivery_fee: self.delivery_fee(),
            total: self.total(),
            lines: std::mem::take(&mut self.lines),
            address: address.to_string(),
            eta_min: shop.delivery_min,
        };
        self.shop = None;
        log::info!("shop order placed: {} ({} PKR)", order.order_id, order.total);
        Ok(order)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShopOrder {
    pub order_id: String,
    pub shop_name: &'static str,
    pub lines: Vec<CartLine>,
    pub subtotal: u32,
    pub delivery_fee: u32,
    pub total: u32,
    pub address: String,
    pub eta_min: u32,
}
