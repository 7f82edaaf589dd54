/// Platform bindings for the layout service and native event types.
#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::CurrentLayout as SystemLayout;

/// Layout provider used when the host has no keyboard layout service.
#[cfg(not(target_os = "macos"))]
pub use crate::layout::NoLayout as SystemLayout;

use crate::translate::KeyTranslator;

/// Translator backed by the host's live keyboard layout.
#[must_use]
pub fn system_translator() -> KeyTranslator<SystemLayout> {
    KeyTranslator::new(SystemLayout::default())
}
