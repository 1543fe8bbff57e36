//! Key/value "local storage" and the typed preferences kept in it.
//!
//! Every preference is a plain string under a fixed key, read once at startup
//! and written through on change. A failed write is logged and otherwise
//! ignored: the in-memory value stays authoritative for the session.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{AccessibilityMode, ColorblindType, Language, StorageError};

pub mod keys {
    pub const LANGUAGE_PROMPT_SEEN: &str = "languagePromptSeen";
    pub const ACCESSIBILITY_MODE: &str = "accessibilityMode";
    pub const COLORBLIND_TYPE: &str = "colorblindType";
    pub const VOICE_ANNOUNCEMENTS: &str = "voiceAnnouncements";
    pub const LANGUAGE: &str = "language";
}

pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    map: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }
    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.map.remove(key);
        Ok(())
    }
}

/// Whole-file JSON object of strings, rewritten on every change.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl JsonFileStorage {
    /// Opens `path`, treating a missing file as empty.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let map = match std::fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, map })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&self.map)?)?;
        Ok(())
    }
}

impl Storage for JsonFileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.insert(key.to_string(), value.to_string());
        self.flush()
    }
    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.map.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub language_prompt_seen: bool,
    pub accessibility_mode: AccessibilityMode,
    pub colorblind_type: ColorblindType,
    pub voice_announcements: bool,
    pub language: Language,
}

impl Preferences {
    /// Unknown or missing values fall back to their defaults.
    pub fn load(store: &dyn Storage) -> Self {
        let flag = |key: &str| store.get(key).is_some_and(|v| v.trim() == "true");
        Self {
            language_prompt_seen: flag(keys::LANGUAGE_PROMPT_SEEN),
            accessibility_mode: store
                .get(keys::ACCESSIBILITY_MODE)
                .and_then(|v| AccessibilityMode::from_key(&v))
                .unwrap_or_default(),
            colorblind_type: store
                .get(keys::COLORBLIND_TYPE)
                .and_then(|v| ColorblindType::from_key(&v))
                .unwrap_or_default(),
            voice_announcements: flag(keys::VOICE_ANNOUNCEMENTS),
            language: store
                .get(keys::LANGUAGE)
                .and_then(|v| Language::from_code(&v))
                .unwrap_or_default(),
        }
    }
}

/// Preferences bound to their backing store.
pub struct PreferenceStore {
    storage: Box<dyn Storage>,
    current: Preferences,
}

impl PreferenceStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let current = Preferences::load(storage.as_ref());
        log::debug!("preferences loaded: {current:?}");
        Self { storage, current }
    }

    pub fn get(&self) -> &Preferences {
        &self.current
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            log::warn!("could not persist {key}: {e}");
        }
    }

    pub fn set_language_prompt_seen(&mut self, seen: bool) {
        self.current.language_prompt_seen = seen;
        self.write(keys::LANGUAGE_PROMPT_SEEN, bool_str(seen));
    }

    pub fn set_accessibility_mode(&mut self, mode: AccessibilityMode) {
        self.current.accessibility_mode = mode;
        self.write(keys::ACCESSIBILITY_MODE, mode.key());
    }

    pub fn set_colorblind_type(&mut self, kind: ColorblindType) {
        self.current.colorblind_type = kind;
        self.write(keys::COLORBLIND_TYPE, kind.key());
    }

    pub fn set_voice_announcements(&mut self, enabled: bool) {
        self.current.voice_announcements = enabled;
        self.write(keys::VOICE_ANNOUNCEMENTS, bool_str(enabled));
    }

    pub fn set_language(&mut self, lang: Language) {
        self.current.language = lang;
        self.write(keys::LANGUAGE, lang.code());
    }
}

fn bool_str(v: bool) -> &'static str {
    if v { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_garbage_values_use_defaults() {
        let mut mem = MemoryStorage::new();
        mem.set(keys::COLORBLIND_TYPE, "infrared").unwrap();
        mem.set(keys::VOICE_ANNOUNCEMENTS, "yes").unwrap();
        assert_eq!(Preferences::load(&mem), Preferences::default());
    }

    #[test]
    fn writes_go_through_to_storage() {
        let mut prefs = PreferenceStore::new(Box::new(MemoryStorage::new()));
        prefs.set_colorblind_type(ColorblindType::Tritanopia);
        prefs.set_accessibility_mode(AccessibilityMode::Colorblind);
        prefs.set_voice_announcements(true);
        prefs.set_language(Language::Urdu);

        let reloaded = Preferences::load(prefs.storage.as_ref());
        assert_eq!(&reloaded, prefs.get());
        assert_eq!(reloaded.colorblind_type, ColorblindType::Tritanopia);
        assert_eq!(reloaded.language, Language::Urdu);
    }

    #[test]
    fn json_file_survives_reopen() {
        let path = std::env::temp_dir().join(format!("safar-prefs-{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);
        {
            let mut file = JsonFileStorage::open(&path).unwrap();
            file.set(keys::LANGUAGE_PROMPT_SEEN, "true").unwrap();
        }
        let file = JsonFileStorage::open(&path).unwrap();
        assert!(Preferences::load(&file).language_prompt_seen);
        let _ = std::fs::remove_file(&path);
    }
}
