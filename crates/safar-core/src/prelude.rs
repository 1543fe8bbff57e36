pub use crate::color::Color;
pub use crate::colorblind::{
    AccessibilityMode, BRAND_GREEN, ColorblindType, SemanticPalette, root_custom_properties,
    transform,
};
pub use crate::effects::{Dispose, effect, on_unmount};
pub use crate::error::{DeviceError, StorageError};
pub use crate::events::EventBus;
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::locale::{Language, TextDirection, tr};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::signal::{Signal, signal};
pub use crate::storage::{MemoryStorage, PreferenceStore, Preferences, Storage};
pub use crate::timers::{TimerId, Timers};
