//! Composition root: owns every piece of app state and routes user actions.

use std::{cell::RefCell, rc::Rc};

use rand::{SeedableRng, rngs::StdRng};
use safar_booking::*;
use safar_core::*;
use safar_navigation::{HomeTab, NavError, Navigator, Screen, install_back_handler};
use safar_tutorial::{
    CloseOutcome, Flow, OverlayLayout, Target, Tutorial, TutorialOverlay, TutorialStep,
};
use web_time::Instant;

use crate::{
    config::AppConfig,
    interpreter::{StepEffect, effects_for},
    layout::{HighlightRegistry, ScreenTargets},
};

/// Measured size of the tutorial popup.
pub const POPUP_SIZE: Size = Size::new(300.0, 180.0);

const TOUR_SHOP: &str = "karachi-biryani";
const TOUR_ADDRESS: &str = "House 12, Gulberg III, Lahore";

#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    StartTutorial,
    TutorialFlowSelected(Flow),
    TutorialClosedNavigateToHelp,
    TutorialFinished,
    Alert(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTimer {
    DriverSearch,
    ArrivalTick,
}

pub fn alert_text(lang: Language, err: &BookingError) -> String {
    let text = tr(lang, err.alert_key());
    match err {
        BookingError::MissingFields(m) => format!("{text}: {}", m.names().join(", ")),
        _ => text.to_string(),
    }
}

pub struct App {
    config: AppConfig,
    nav: Navigator,
    tutorial: Tutorial,
    overlay: TutorialOverlay,
    highlights: Rc<HighlightRegistry>,
    bus: EventBus<AppEvent>,
    prefs: PreferenceStore,
    voice: Rc<RefCell<Voice>>,
    language: Signal<Language>,
    timers: Rc<RefCell<Timers<AppTimer>>>,
    now: Instant,
    rng: StdRng,
    home_tab: HomeTab,
    ride_request: Option<RideRequest>,
    offers: Vec<DriverOffer>,
    ride: Option<Ride>,
    parcel_form: ParcelForm,
    parcel_order: Option<ParcelOrder>,
    shop: Option<&'static Shop>,
    cart: Cart,
    shop_order: Option<ShopOrder>,
    rental: Option<RentalBooking>,
    devices: Devices,
    alerts: Vec<String>,
    /// Announcer subscription; cleaned up with the app.
    _scope: Scope,
}

impl App {
    pub fn new(config: AppConfig, storage: Box<dyn Storage>, announcer: Box<dyn Announcer>) -> Self {
        let prefs = PreferenceStore::new(storage);
        let p = prefs.get().clone();
        let lang = if p.language_prompt_seen {
            p.language
        } else {
            match config.initial_language() {
                Ok(l) => l.unwrap_or(p.language),
                Err(e) => {
                    log::warn!("{e}; using {}", p.language.code());
                    p.language
                }
            }
        };
        let start = if p.language_prompt_seen {
            Screen::Home
        } else {
            Screen::LanguageSelect
        };

        let nav = Navigator::new(start);
        let highlights = Rc::new(HighlightRegistry::default());
        let voice = Rc::new(RefCell::new(Voice::new(announcer, p.voice_announcements)));
        let language = signal(lang);

        let scope = Scope::new();
        let announce = nav.current_signal().observe({
            let voice = voice.clone();
            let language = language.clone();
            move |screen: &Screen| {
                let lang = language.get();
                voice.borrow().announce(tr(lang, &screen.title_key()), lang);
            }
        });
        scope.add_disposer(move || announce.run());

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        log::info!("safar started on {start} ({})", lang.code());
        Self {
            config,
            nav,
            tutorial: Tutorial::new(),
            overlay: TutorialOverlay::new(highlights.clone()),
            highlights,
            bus: EventBus::new(),
            prefs,
            voice,
            language,
            timers: Rc::new(RefCell::new(Timers::new())),
            now: Instant::now(),
            rng,
            home_tab: HomeTab::default(),
            ride_request: None,
            offers: Vec::new(),
            ride: None,
            parcel_form: ParcelForm::default(),
            parcel_order: None,
            shop: None,
            cart: Cart::new(),
            shop_order: None,
            rental: None,
            devices: Devices::headless(),
            alerts: Vec::new(),
            _scope: scope,
        }
    }

    /// In-memory preferences, log-only speech.
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(config, Box::new(MemoryStorage::new()), Box::new(LogAnnouncer))
    }

    pub fn with_devices(mut self, devices: Devices) -> Self {
        self.devices = devices;
        self
    }

    // ---- state ----

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn current_screen(&self) -> Screen {
        self.nav.current()
    }

    pub fn home_tab(&self) -> HomeTab {
        self.home_tab
    }

    pub fn tutorial(&self) -> &Tutorial {
        &self.tutorial
    }

    pub fn overlay_layout(&self) -> Option<OverlayLayout> {
        self.overlay.layout()
    }

    pub fn highlighted(&self) -> Vec<Target> {
        self.highlights.active()
    }

    pub fn events(&self) -> EventBus<AppEvent> {
        self.bus.clone()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Dismisses every open alert.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn preferences(&self) -> &Preferences {
        self.prefs.get()
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn direction(&self) -> TextDirection {
        self.language().direction()
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn active_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn ride_request(&self) -> Option<&RideRequest> {
        self.ride_request.as_ref()
    }

    pub fn offers(&self) -> &[DriverOffer] {
        &self.offers
    }

    pub fn ride(&self) -> Option<&Ride> {
        self.ride.as_ref()
    }

    pub fn parcel_form(&self) -> &ParcelForm {
        &self.parcel_form
    }

    pub fn parcel_order(&self) -> Option<&ParcelOrder> {
        self.parcel_order.as_ref()
    }

    pub fn selected_shop(&self) -> Option<&'static Shop> {
        self.shop
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn shop_order(&self) -> Option<&ShopOrder> {
        self.shop_order.as_ref()
    }

    pub fn rental(&self) -> Option<&RentalBooking> {
        self.rental.as_ref()
    }

    // ---- events ----

    /// Delivers queued events until the queue is empty.
    pub fn pump(&mut self) {
        while let Some(event) = self.bus.poll() {
            self.handle(event);
        }
    }

    fn handle(&mut self, event: AppEvent) {
        log::debug!("event {event:?}");
        match event {
            AppEvent::StartTutorial | AppEvent::TutorialFinished => {
                self.overlay.hide();
                self.tutorial.show_selection_screen();
            }
            AppEvent::TutorialFlowSelected(flow) => self.begin_flow(flow),
            AppEvent::TutorialClosedNavigateToHelp => self.nav.show(Screen::Help),
            AppEvent::Alert(text) => {
                log::info!("alert: {text}");
                self.alerts.push(text);
            }
        }
    }

    fn alert(&self, err: &BookingError) {
        log::debug!("validation failed: {err}");
        self.bus.emit(AppEvent::Alert(alert_text(self.language(), err)));
    }

    /// Raises an alert for `Err` and delivers it before returning.
    fn checked<T>(&mut self, result: Result<T, BookingError>) -> Result<T, BookingError> {
        if let Err(e) = &result {
            self.alert(e);
            self.pump();
        }
        result
    }

    // ---- navigation ----

    pub fn navigate(&mut self, screen: Screen) -> Result<(), NavError> {
        self.nav.push(screen).inspect_err(|e| log::warn!("{e}"))
    }

    pub fn back(&mut self) -> bool {
        self.nav.pop()
    }

    /// Routes the platform's hardware back button to this app until disposed.
    pub fn install_back_handler(&self) -> Dispose {
        install_back_handler(&self.nav)
    }

    pub fn select_tab(&mut self, tab: HomeTab) {
        self.home_tab = tab;
    }

    /// Push when legal, otherwise take the shortest legal route.
    fn go(&self, screen: Screen) {
        if self.nav.push(screen).is_err() {
            self.nav.show(screen);
        }
    }

    /// Runs `start` in the visible screen's scope; its cleanup cancels the timer.
    fn schedule_on_screen(&self, start: impl FnOnce(&mut Timers<AppTimer>) -> TimerId) {
        let Some(scope) = self.nav.top_scope() else {
            return;
        };
        let timers = self.timers.clone();
        scope.run(|| {
            scoped_effect(|| {
                let id = start(&mut timers.borrow_mut());
                Box::new(move || {
                    timers.borrow_mut().cancel(id);
                })
            })
        });
    }

    /// Fires every timer due at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        let due = self.timers.borrow_mut().poll(now);
        for (id, timer) in due {
            match timer {
                AppTimer::DriverSearch => self.driver_search_done(),
                AppTimer::ArrivalTick => {
                    let arrived = self.ride.as_mut().is_some_and(Ride::tick_eta);
                    if arrived {
                        self.timers.borrow_mut().cancel(id);
                        if let Some(Err(e)) = self.ride.as_mut().map(Ride::arrive) {
                            log::debug!("arrival ignored: {e}");
                        }
                        log::info!("driver arrived");
                    }
                }
            }
        }
    }

    // ---- preferences ----

    pub fn choose_language(&mut self, lang: Language) {
        self.prefs.set_language(lang);
        self.prefs.set_language_prompt_seen(true);
        self.language.set(lang);
        if self.nav.current() == Screen::LanguageSelect && !self.nav.pop() {
            self.nav.clear_and_push(Screen::Home);
        }
    }

    pub fn set_accessibility_mode(&mut self, mode: AccessibilityMode) {
        self.prefs.set_accessibility_mode(mode);
    }

    pub fn set_colorblind_type(&mut self, kind: ColorblindType) {
        self.prefs.set_colorblind_type(kind);
    }

    pub fn set_voice_announcements(&mut self, enabled: bool) {
        self.prefs.set_voice_announcements(enabled);
        self.voice.borrow_mut().set_enabled(enabled);
    }

    pub fn palette(&self) -> SemanticPalette {
        let p = self.prefs.get();
        SemanticPalette::for_mode(p.accessibility_mode, p.colorblind_type)
    }

    /// Custom properties for the app root.
    pub fn root_properties(&self) -> Vec<(&'static str, String)> {
        root_custom_properties(&self.palette())
    }

    /// Any app color as currently displayed.
    pub fn display_color(&self, color: Color) -> Color {
        let p = self.prefs.get();
        match p.accessibility_mode {
            AccessibilityMode::Colorblind => transform(color, p.colorblind_type),
            _ => color,
        }
    }

    // ---- tutorial ----

    pub fn start_tutorial(&mut self) {
        self.bus.emit(AppEvent::StartTutorial);
        self.pump();
    }

    pub fn select_flow(&mut self, flow: Flow) {
        self.bus.emit(AppEvent::TutorialFlowSelected(flow));
        self.pump();
    }

    fn begin_flow(&mut self, flow: Flow) {
        let bus = self.bus.clone();
        let on_finish = Box::new(move || bus.emit(AppEvent::TutorialFinished));
        let first = self.tutorial.start(flow.steps(), on_finish).cloned();
        if let Some(step) = first {
            log::info!("tutorial {} started", flow.key());
            self.enter_step(&step);
        }
    }

    pub fn tutorial_next(&mut self) -> bool {
        let step = self.tutorial.next().cloned();
        step.map(|s| self.enter_step(&s)).is_some()
    }

    pub fn tutorial_previous(&mut self) -> bool {
        let step = self.tutorial.previous().cloned();
        step.map(|s| self.enter_step(&s)).is_some()
    }

    pub fn tutorial_close(&mut self, finishing: bool) -> CloseOutcome {
        let outcome = self.tutorial.close(finishing);
        self.overlay.hide();
        if outcome == CloseOutcome::Dismissed {
            self.bus.emit(AppEvent::TutorialClosedNavigateToHelp);
        }
        self.pump();
        outcome
    }

    fn enter_step(&mut self, step: &TutorialStep) {
        for effect in effects_for(step.id) {
            self.apply(effect);
        }
        let viewport = self.config.viewport_size();
        let at = ScreenTargets::new(self.nav.current(), self.home_tab, viewport);
        self.overlay.show_step(step, &at, POPUP_SIZE, viewport);
        let lang = self.language();
        self.voice.borrow().announce(tr(lang, step.title_key), lang);
    }

    fn apply(&mut self, effect: StepEffect) {
        log::trace!("step effect {effect:?}");
        match effect {
            StepEffect::Reset(screen) => {
                self.clear_bookings();
                self.nav.clear_and_push(screen);
            }
            StepEffect::Show(screen) => self.nav.show(screen),
            StepEffect::SelectTab(tab) => self.home_tab = tab,
            StepEffect::PrefillRide => {
                if self.ride_request.is_none() {
                    self.ride_request = Some(tutorial_request());
                }
            }
            StepEffect::MockOffers => {
                self.offers = tutorial_offers();
                self.ride = self.ride_request.clone().map(Ride::searching);
            }
            StepEffect::MockRide => self.ride = Some(tutorial_ride()),
            StepEffect::PrefillParcel => self.parcel_form = tutorial_parcel(),
            StepEffect::PlaceMockParcelOrder => {
                if self.parcel_order.is_none() {
                    let order = self.parcel_form.submit(&mut self.rng);
                    if let Ok(order) = self.checked(order) {
                        self.parcel_order = Some(order);
                    }
                }
            }
            StepEffect::SelectShop => self.shop = find_shop(TOUR_SHOP),
            StepEffect::FillCart => {
                if let Some(shop) = self.shop.filter(|_| self.cart.is_empty())
                    && let Some(item) = shop.menu.first()
                    && let Err(e) = self.cart.add(shop, item.id)
                {
                    log::debug!("tour cart not filled: {e}");
                }
            }
            StepEffect::PlaceMockShopOrder => {
                if self.shop_order.is_none() {
                    let order = self.cart.checkout(TOUR_ADDRESS, &mut self.rng);
                    if let Ok(order) = self.checked(order) {
                        self.shop_order = Some(order);
                    }
                }
            }
        }
    }

    fn clear_bookings(&mut self) {
        self.ride_request = None;
        self.offers.clear();
        self.ride = None;
        self.parcel_form = ParcelForm::default();
        self.parcel_order = None;
        self.shop = None;
        self.cart.clear();
        self.shop_order = None;
    }

    // ---- rides ----

    /// Validates the request and starts searching for a driver.
    pub fn request_ride(
        &mut self,
        pickup: &str,
        destination: &str,
        vehicle: VehicleKind,
        distance_km: f64,
        offer: Option<u32>,
    ) -> Result<(), BookingError> {
        let request = RideRequest::new(pickup, destination, vehicle, distance_km).and_then(|mut r| {
            if let Some(fare) = offer {
                r.offer(fare)?;
            }
            Ok(r)
        });
        let request = self.checked(request)?;
        self.start_search(request);
        Ok(())
    }

    /// Label and position of the device's location.
    fn current_location(&self) -> Result<(String, LatLng), BookingError> {
        let here = self.devices.locate().ok_or(BookingError::LocationUnavailable)?;
        let label = format!(
            "{} ({:.4}, {:.4})",
            tr(self.language(), "pickup.current"),
            here.lat,
            here.lng
        );
        Ok((label, here))
    }

    /// Rides from the current location; the distance is the straight line to
    /// `to`.
    pub fn request_ride_from_here(
        &mut self,
        destination: &str,
        to: LatLng,
        vehicle: VehicleKind,
        offer: Option<u32>,
    ) -> Result<(), BookingError> {
        let here = self.current_location();
        let (pickup, from) = self.checked(here)?;
        self.request_ride(&pickup, destination, vehicle, from.distance_km(&to), offer)
    }

    /// Shares the assigned driver and route through the share sheet.
    pub fn share_ride(&self) -> bool {
        let Some(ride) = self.ride.as_ref() else {
            return false;
        };
        let Some(driver) = ride.driver else {
            return false;
        };
        let text = format!(
            "{} -> {}: {} ({}, {}), {} PKR",
            ride.request.pickup,
            ride.request.destination,
            driver.name,
            driver.vehicle,
            driver.plate,
            ride.fare
        );
        self.devices.share(tr(self.language(), "share.ride.title"), &text)
    }

    fn start_search(&mut self, request: RideRequest) {
        log::info!(
            "searching: {} -> {} ({}, {} PKR)",
            request.pickup,
            request.destination,
            request.vehicle.key(),
            request.offered_fare
        );
        self.ride = Some(Ride::searching(request.clone()));
        self.ride_request = Some(request);
        self.offers.clear();
        self.go(Screen::FindingDriver);
        let (now, delay) = (self.now, self.config.driver_search_delay());
        self.schedule_on_screen(|t| t.once(now, delay, AppTimer::DriverSearch));
    }

    fn driver_search_done(&mut self) {
        let Some(fare) = self.ride.as_ref().map(|r| r.request.offered_fare) else {
            return;
        };
        self.offers = generate_offers(&mut self.rng, fare, 3);
        log::debug!("{} offers received", self.offers.len());
        self.go(Screen::DriverOffers);
    }

    pub fn accept_offer(&mut self, index: usize) -> Result<(), BookingError> {
        let result = match (self.offers.get(index).copied(), self.ride.as_mut()) {
            (None, _) => Err(BookingError::UnknownOffer(index)),
            (_, None) => Err(BookingError::NoActiveRide),
            (Some(offer), Some(ride)) => ride.accept(&offer),
        };
        self.checked(result)?;
        self.go(Screen::RideTracking);
        let (now, period) = (self.now, self.config.eta_tick());
        self.schedule_on_screen(|t| t.every(now, period, AppTimer::ArrivalTick));
        Ok(())
    }

    fn with_ride(&mut self, f: impl FnOnce(&mut Ride) -> Result<(), BookingError>) -> Result<(), BookingError> {
        let result = match self.ride.as_mut() {
            Some(ride) => f(ride),
            None => Err(BookingError::NoActiveRide),
        };
        self.checked(result)
    }

    pub fn start_trip(&mut self) -> Result<(), BookingError> {
        self.with_ride(Ride::start)
    }

    pub fn complete_ride(&mut self) -> Result<(), BookingError> {
        self.with_ride(Ride::complete)?;
        self.go(Screen::RideCompleted);
        Ok(())
    }

    pub fn open_cancel(&mut self) -> Result<(), NavError> {
        self.navigate(Screen::CancelRide)
    }

    /// Cancels with `reason`; without one the app alerts and stays put.
    pub fn confirm_cancel(&mut self, reason: Option<&str>) -> Result<(), BookingError> {
        self.with_ride(|ride| ride.cancel(reason))?;
        self.offers.clear();
        self.nav.clear_and_push(Screen::Home);
        Ok(())
    }

    // ---- parcels ----

    pub fn open_parcel(&mut self) {
        self.home_tab = HomeTab::Delivery;
        self.go(Screen::ParcelDetails);
    }

    pub fn edit_parcel(&mut self, f: impl FnOnce(&mut ParcelForm)) {
        f(&mut self.parcel_form);
    }

    /// On success returns the tracking id and shows order-placed.
    pub fn submit_parcel(&mut self) -> Result<String, BookingError> {
        let order = self.parcel_form.submit(&mut self.rng);
        let order = self.checked(order)?;
        let id = order.tracking_id.clone();
        self.parcel_order = Some(order);
        self.go(Screen::OrderPlaced);
        Ok(id)
    }

    /// Copies the parcel tracking id.
    pub fn copy_tracking_id(&self) -> bool {
        self.parcel_order
            .as_ref()
            .is_some_and(|o| self.devices.copy(&o.tracking_id))
    }

    // ---- shops ----

    pub fn open_shops(&mut self) {
        self.home_tab = HomeTab::Shops;
        self.go(Screen::Shops);
    }

    pub fn open_shop(&mut self, id: &str) -> Result<(), BookingError> {
        let shop = find_shop(id).ok_or_else(|| BookingError::UnknownItem(id.to_string()));
        self.shop = Some(self.checked(shop)?);
        self.go(Screen::ShopDetail);
        Ok(())
    }

    pub fn add_to_cart(&mut self, item_id: &str) -> Result<(), BookingError> {
        let result = match self.shop {
            Some(shop) => self.cart.add(shop, item_id),
            None => Err(BookingError::UnknownItem(item_id.to_string())),
        };
        self.checked(result)
    }

    pub fn remove_from_cart(&mut self, item_id: &str) -> Result<(), BookingError> {
        let result = self.cart.remove(item_id);
        self.checked(result)
    }

    pub fn open_cart(&mut self) {
        self.go(Screen::Cart);
    }

    pub fn open_checkout(&mut self) -> Result<(), BookingError> {
        if self.cart.is_empty() {
            return self.checked(Err(BookingError::EmptyCart));
        }
        self.go(Screen::Checkout);
        Ok(())
    }

    /// On success returns the order id and shows order-placed.
    pub fn place_order(&mut self, address: &str) -> Result<String, BookingError> {
        let order = self.cart.checkout(address, &mut self.rng);
        let order = self.checked(order)?;
        let id = order.order_id.clone();
        self.shop_order = Some(order);
        self.go(Screen::OrderPlaced);
        Ok(id)
    }

    pub fn copy_order_id(&self) -> bool {
        self.shop_order
            .as_ref()
            .is_some_and(|o| self.devices.copy(&o.order_id))
    }

    // ---- rentals ----

    pub fn book_rental(&mut self, package_id: &str, vehicle: VehicleKind) -> Result<(), BookingError> {
        let booking = self.checked(rental::book(package_id, vehicle))?;
        self.rental = Some(booking);
        self.go(Screen::RentalConfirm);
        Ok(())
    }

    /// Searches for a driver for the booked rental. A blank `pickup` means
    /// the current location.
    pub fn confirm_rental(&mut self, pickup: &str) -> Result<(), BookingError> {
        let Some(booking) = self.rental.clone() else {
            return self.checked(Err(BookingError::NoRental));
        };
        let pickup = match pickup.trim() {
            "" => self.current_location().map(|(label, _)| label),
            typed => Ok(typed.to_string()),
        };
        let pickup = self.checked(pickup)?;
        let request = RideRequest {
            pickup,
            destination: format!("{} rental", booking.package.id),
            vehicle: booking.vehicle,
            distance_km: booking.package.included_km as f64,
            duration_min: (booking.package.hours * 60) as f64,
            offered_fare: booking.price,
        };
        self.start_search(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::in_memory(AppConfig {
            seed: Some(11),
            ..AppConfig::default()
        })
    }

    #[test]
    fn first_launch_asks_for_language() {
        let mut app = app();
        assert_eq!(app.current_screen(), Screen::LanguageSelect);
        app.choose_language(Language::Urdu);
        assert_eq!(app.current_screen(), Screen::Home);
        assert_eq!(app.direction(), TextDirection::Rtl);
        assert!(app.preferences().language_prompt_seen);
    }

    #[test]
    fn stored_preferences_skip_the_prompt() {
        let mut store = MemoryStorage::new();
        store.set(keys::LANGUAGE_PROMPT_SEEN, "true").unwrap();
        store.set(keys::LANGUAGE, "ur").unwrap();
        store.set(keys::ACCESSIBILITY_MODE, "colorblind").unwrap();
        let app = App::new(AppConfig::default(), Box::new(store), Box::new(LogAnnouncer));
        assert_eq!(app.current_screen(), Screen::Home);
        assert_eq!(app.language(), Language::Urdu);
        assert_eq!(app.display_color(BRAND_GREEN), Color::from_hex("#2563eb"));
    }

    #[test]
    fn back_pops_the_stack() {
        let mut app = app();
        app.choose_language(Language::English);
        app.navigate(Screen::Help).unwrap();
        assert!(app.back());
        assert_eq!(app.current_screen(), Screen::Home);
        assert!(!app.back());
    }

    #[test]
    fn back_acts_on_each_apps_own_stack() {
        let mut a = app();
        a.choose_language(Language::English);
        a.navigate(Screen::Help).unwrap();
        drop(app());

        let mut c = app();
        c.choose_language(Language::English);
        c.navigate(Screen::Help).unwrap();
        let mut d = app();
        d.choose_language(Language::English);

        assert!(c.back());
        assert_eq!(c.navigator().screens(), vec![Screen::Home]);
        assert!(!d.back());
        assert!(a.back());
        assert_eq!(a.navigator().screens(), vec![Screen::Home]);
    }

    #[test]
    fn hardware_back_reaches_the_installed_app() {
        let mut app = app();
        app.choose_language(Language::English);
        app.navigate(Screen::Settings).unwrap();
        let handler = app.install_back_handler();
        assert!(safar_navigation::back::handle());
        assert_eq!(app.current_screen(), Screen::Home);
        handler.run();
        app.navigate(Screen::Help).unwrap();
        assert!(!safar_navigation::back::handle());
        assert_eq!(app.current_screen(), Screen::Help);
    }

    #[test]
    fn confirming_without_a_rental_alerts() {
        let mut app = app();
        app.choose_language(Language::English);
        assert_eq!(app.confirm_rental("Gulberg"), Err(BookingError::NoRental));
        assert_eq!(app.take_alerts(), vec!["Please book a rental package first"]);
    }

    #[test]
    fn illegal_navigation_is_refused() {
        let mut app = app();
        app.choose_language(Language::English);
        assert!(app.navigate(Screen::Checkout).is_err());
        assert_eq!(app.current_screen(), Screen::Home);
    }

    #[test]
    fn high_contrast_changes_root_palette() {
        let mut app = app();
        let before = app.root_properties();
        app.set_accessibility_mode(AccessibilityMode::HighContrast);
        assert_ne!(app.root_properties(), before);
        assert_eq!(app.palette(), SemanticPalette::HIGH_CONTRAST);
    }

    #[test]
    fn missing_fields_alert_lists_them() {
        let err = BookingError::MissingFields(MissingFields::WEIGHT | MissingFields::RECIPIENT_PHONE);
        assert_eq!(
            alert_text(Language::English, &err),
            "Please fill in all required parcel details: weight, recipientPhone"
        );
    }
}
