//! Where tutorial targets sit on each mock screen.
//!
//! The headless app has no layout engine, so element rects come from a fixed
//! table drawn on a 390×844 phone and scaled to the configured viewport.

use std::cell::RefCell;

use safar_core::{Rect, Size};
use safar_navigation::{HomeTab, Screen};
use safar_tutorial::{Highlighter, Target, TargetLocator};

const BASE: Size = Size::new(390.0, 844.0);

struct Slot {
    screen: Screen,
    /// Only present while this home tab is selected.
    tab: Option<HomeTab>,
    selector: &'static str,
    rect: Rect,
}

const fn slot(screen: Screen, tab: Option<HomeTab>, selector: &'static str, rect: Rect) -> Slot {
    Slot {
        screen,
        tab,
        selector,
        rect,
    }
}

const RIDE: Option<HomeTab> = Some(HomeTab::Ride);

static SLOTS: &[Slot] = &[
    slot(Screen::Home, None, "#tab-ride", Rect::new(0.0, 780.0, 97.5, 64.0)),
    slot(Screen::Home, None, "#tab-delivery", Rect::new(97.5, 780.0, 97.5, 64.0)),
    slot(Screen::Home, None, "#tab-shops", Rect::new(195.0, 780.0, 97.5, 64.0)),
    slot(Screen::Home, None, "#tab-rentals", Rect::new(292.5, 780.0, 97.5, 64.0)),
    slot(Screen::Home, RIDE, "#pickup-input", Rect::new(16.0, 420.0, 358.0, 48.0)),
    slot(Screen::Home, RIDE, "#destination-input", Rect::new(16.0, 476.0, 358.0, 48.0)),
    slot(Screen::Home, RIDE, "#vehicle-options", Rect::new(16.0, 536.0, 358.0, 88.0)),
    slot(Screen::Home, RIDE, "#fare-input", Rect::new(16.0, 636.0, 358.0, 48.0)),
    slot(Screen::Home, RIDE, "#find-driver-button", Rect::new(16.0, 700.0, 358.0, 56.0)),
    slot(Screen::DriverOffers, None, ".driver-offer-list", Rect::new(16.0, 120.0, 358.0, 420.0)),
    slot(Screen::DriverOffers, None, "#accept-offer-0", Rect::new(262.0, 160.0, 96.0, 40.0)),
    slot(Screen::RideTracking, None, "#driver-card", Rect::new(16.0, 560.0, 358.0, 160.0)),
    slot(Screen::ParcelDetails, None, ".parcel-route", Rect::new(16.0, 96.0, 358.0, 112.0)),
    slot(Screen::ParcelDetails, None, "#parcel-weight", Rect::new(16.0, 300.0, 358.0, 48.0)),
    slot(Screen::ParcelDetails, None, ".parcel-recipient", Rect::new(16.0, 420.0, 358.0, 112.0)),
    slot(Screen::ParcelDetails, None, "#parcel-submit", Rect::new(16.0, 740.0, 358.0, 56.0)),
    slot(Screen::OrderPlaced, None, "#tracking-id", Rect::new(16.0, 340.0, 358.0, 56.0)),
    slot(Screen::Shops, None, ".shop-list", Rect::new(16.0, 160.0, 358.0, 560.0)),
    slot(Screen::ShopDetail, None, ".menu-list", Rect::new(16.0, 240.0, 358.0, 480.0)),
    slot(Screen::ShopDetail, None, "#add-item-0", Rect::new(310.0, 252.0, 48.0, 40.0)),
    slot(Screen::Cart, None, ".cart-lines", Rect::new(16.0, 96.0, 358.0, 360.0)),
    slot(Screen::Checkout, None, "#address-input", Rect::new(16.0, 140.0, 358.0, 48.0)),
];

/// Targets visible on one screen, scaled to the viewport.
pub struct ScreenTargets {
    pub screen: Screen,
    pub tab: HomeTab,
    pub viewport: Size,
}

impl ScreenTargets {
    pub fn new(screen: Screen, tab: HomeTab, viewport: Size) -> Self {
        Self {
            screen,
            tab,
            viewport,
        }
    }

    fn scale(&self, r: Rect) -> Rect {
        let sx = self.viewport.width / BASE.width;
        let sy = self.viewport.height / BASE.height;
        Rect::new(r.x * sx, r.y * sy, r.w * sx, r.h * sy)
    }
}

impl TargetLocator for ScreenTargets {
    fn locate(&self, target: &Target) -> Option<Rect> {
        let selector = target.selector();
        SLOTS
            .iter()
            .find(|s| {
                s.screen == self.screen
                    && s.tab.is_none_or(|t| t == self.tab)
                    && s.selector == selector
            })
            .map(|s| self.scale(s.rect))
    }
}

/// Records which targets are currently highlighted.
#[derive(Default)]
pub struct HighlightRegistry {
    active: RefCell<Vec<Target>>,
}

impl HighlightRegistry {
    pub fn active(&self) -> Vec<Target> {
        self.active.borrow().clone()
    }
}

impl Highlighter for HighlightRegistry {
    fn apply(&self, target: &Target) {
        log::trace!("highlight on {}", target.selector());
        self.active.borrow_mut().push(*target);
    }

    fn clear(&self, target: &Target) {
        log::trace!("highlight off {}", target.selector());
        self.active.borrow_mut().retain(|t| t != target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safar_tutorial::Flow;

    #[test]
    fn every_targeted_step_resolves_on_its_screen() {
        for flow in Flow::ALL {
            let tab = match flow {
                Flow::Ride => HomeTab::Ride,
                Flow::Delivery => HomeTab::Delivery,
                Flow::Shops => HomeTab::Shops,
            };
            for step in flow.steps() {
                let Some(target) = step.target else { continue };
                let at = ScreenTargets::new(step.screen, tab, BASE);
                assert!(at.locate(&target).is_some(), "{:?} unresolved", step.id);
            }
        }
    }

    #[test]
    fn ride_inputs_hide_on_other_tabs() {
        let at = ScreenTargets::new(Screen::Home, HomeTab::Shops, BASE);
        assert!(at.locate(&Target::Id("pickup-input")).is_none());
        assert!(at.locate(&Target::Id("tab-shops")).is_some());
    }

    #[test]
    fn rects_scale_with_viewport() {
        let at = ScreenTargets::new(Screen::Cart, HomeTab::Ride, Size::new(780.0, 1688.0));
        assert_eq!(
            at.locate(&Target::Selector(".cart-lines")),
            Some(Rect::new(32.0, 192.0, 716.0, 720.0))
        );
    }
}
