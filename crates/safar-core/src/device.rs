//! Optional device services. Every one of them may be missing or refuse;
//! callers degrade silently.

use crate::{DeviceError, Language};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance in kilometres.
    pub fn distance_km(&self, other: &LatLng) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let dlat = lat2 - lat1;
        let dlng = (other.lng - self.lng).to_radians();
        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

pub trait Geolocation {
    fn current_position(&self) -> Result<LatLng, DeviceError>;
}

/// Always reports the same position.
pub struct FixedLocation(pub LatLng);

impl Geolocation for FixedLocation {
    fn current_position(&self) -> Result<LatLng, DeviceError> {
        Ok(self.0)
    }
}

pub struct NoGeolocation;

impl Geolocation for NoGeolocation {
    fn current_position(&self) -> Result<LatLng, DeviceError> {
        Err(DeviceError::Unavailable)
    }
}

/// Speech output.
pub trait Announcer {
    fn speak(&self, text: &str, lang: Language) -> Result<(), DeviceError>;
    fn cancel(&self) {}
}

/// Writes utterances to the log instead of a speaker.
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn speak(&self, text: &str, lang: Language) -> Result<(), DeviceError> {
        log::info!("[speech {}] {text}", lang.voice_tag());
        Ok(())
    }
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), DeviceError>;
}

pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&self, _text: &str) -> Result<(), DeviceError> {
        Err(DeviceError::Unavailable)
    }
}

/// Native share sheet.
pub trait Share {
    fn share(&self, title: &str, text: &str) -> Result<(), DeviceError>;
}

pub struct NoShare;

impl Share for NoShare {
    fn share(&self, _title: &str, _text: &str) -> Result<(), DeviceError> {
        Err(DeviceError::Unavailable)
    }
}

/// Location, clipboard and share sheet. Speech lives in [`Voice`].
pub struct Devices {
    pub geolocation: Box<dyn Geolocation>,
    pub clipboard: Box<dyn Clipboard>,
    pub share: Box<dyn Share>,
}

impl Devices {
    /// None of the services present.
    pub fn headless() -> Self {
        Self {
            geolocation: Box::new(NoGeolocation),
            clipboard: Box::new(NoClipboard),
            share: Box::new(NoShare),
        }
    }

    pub fn locate(&self) -> Option<LatLng> {
        self.geolocation
            .current_position()
            .inspect_err(|e| log::debug!("geolocation failed: {e}"))
            .ok()
    }

    /// True when the text reached the clipboard.
    pub fn copy(&self, text: &str) -> bool {
        self.clipboard
            .write_text(text)
            .inspect_err(|e| log::debug!("clipboard write failed: {e}"))
            .is_ok()
    }

    /// True when the share sheet accepted the text.
    pub fn share(&self, title: &str, text: &str) -> bool {
        self.share
            .share(title, text)
            .inspect_err(|e| log::debug!("share failed: {e}"))
            .is_ok()
    }
}

impl Default for Devices {
    fn default() -> Self {
        Self::headless()
    }
}

/// Voice announcements gated by the user's preference.
pub struct Voice {
    announcer: Box<dyn Announcer>,
    enabled: bool,
}

impl Voice {
    pub fn new(announcer: Box<dyn Announcer>, enabled: bool) -> Self {
        Self { announcer, enabled }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.announcer.cancel();
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queues `text` when enabled; failures are swallowed.
    pub fn announce(&self, text: &str, lang: Language) {
        if !self.enabled || text.is_empty() {
            return;
        }
        if let Err(e) = self.announcer.speak(text, lang) {
            log::debug!("speech failed: {e}");
        }
    }
}
