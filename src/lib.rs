#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! keyglyph — render macOS keyboard shortcuts as menu-style glyph strings.
//!
//! ```
//! use keyglyph::{FixedLayout, KeyTranslator, Shortcut, keycode};
//!
//! let translator = KeyTranslator::new(FixedLayout::us_ansi());
//! let save_as = Shortcut::new(keycode::ANSI_S, true, false, false, true);
//! assert_eq!(save_as.description(&translator), "⇧⌘S");
//! ```

pub mod event;
pub mod keycode;
pub mod layout;
pub mod modifiers;
pub mod platform;
pub mod shortcut;
pub mod translate;

pub use event::{KeyEvent, KeyEventSource, SystemKeyEvent, UiKeyEvent};
pub use keycode::KeyCode;
pub use layout::{FixedLayout, LayoutError, LayoutProvider, NoLayout};
pub use modifiers::ModifierMask;
pub use platform::{SystemLayout, system_translator};
pub use shortcut::Shortcut;
pub use translate::{KeyTranslator, Resolution, SPECIAL_KEYS, special_key_glyph};
