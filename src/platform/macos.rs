/// macOS keyboard layout (Text Input Sources + `UCKeyTranslate`) and AppKit / Quartz event adapters.
use std::ffi::c_void;

use core_foundation::{
    base::{CFType, CFTypeRef, TCFType},
    data::{CFData, CFDataRef},
};
use core_foundation_sys::string::CFStringRef;
use core_graphics::event::{CGEvent, EventField};
use objc2_app_kit::{NSEvent, NSEventModifierFlags};
use tracing::debug;

use crate::event::KeyEventSource;
use crate::keycode::KeyCode;
use crate::layout::{check_os_status, LayoutError, LayoutProvider};
use crate::modifiers::ModifierMask;

type TISInputSourceRef = *mut c_void;
/// Opaque `UCKeyboardLayout` header; only ever handled by pointer.
type UCKeyboardLayout = c_void;

/// `kUCKeyActionDisplay`: translate for display, not for a key press.
const UC_KEY_ACTION_DISPLAY: u16 = 3;
/// `kUCKeyTranslateNoDeadKeysMask`.
const UC_KEY_TRANSLATE_NO_DEAD_KEYS_MASK: u32 = 1;
/// Output buffer size in UTF-16 units; only the first character is used.
const MAX_OUTPUT_UNITS: usize = 4;

#[link(name = "Carbon", kind = "framework")]
unsafe extern "C" {
    static kTISPropertyUnicodeKeyLayoutData: CFStringRef;

    fn TISCopyCurrentASCIICapableKeyboardLayoutInputSource() -> TISInputSourceRef;
    fn TISGetInputSourceProperty(source: TISInputSourceRef, key: CFStringRef) -> *const c_void;
    fn LMGetKbdType() -> u8;
    fn UCKeyTranslate(
        key_layout: *const UCKeyboardLayout,
        virtual_key_code: u16,
        key_action: u16,
        modifier_key_state: u32,
        keyboard_type: u32,
        key_translate_options: u32,
        dead_key_state: *mut u32,
        max_string_length: usize,
        actual_string_length: *mut usize,
        unicode_string: *mut u16,
    ) -> i32;
}

/// The user's current ASCII-capable keyboard layout.
///
/// Every call re-queries the input source, so switching layouts takes effect
/// on the next translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentLayout;

impl CurrentLayout {
    /// Copy the current ASCII-capable input source and its Unicode layout data.
    fn layout_data() -> Result<(CFType, CFData), LayoutError> {
        // SAFETY: no arguments; returns a +1 retained ref or null.
        let raw = unsafe { TISCopyCurrentASCIICapableKeyboardLayoutInputSource() };
        if raw.is_null() {
            return Err(LayoutError::NoAsciiCapableLayout);
        }
        // SAFETY: non-null, and we own the +1 retain from the Copy call.
        let source = unsafe { CFType::wrap_under_create_rule(raw as CFTypeRef) };

        // SAFETY: `source` is a live input source; the property key is a framework constant.
        let data = unsafe {
            TISGetInputSourceProperty(
                source.as_CFTypeRef() as TISInputSourceRef,
                kTISPropertyUnicodeKeyLayoutData,
            )
        };
        if data.is_null() {
            return Err(LayoutError::LayoutDataUnavailable);
        }
        // SAFETY: the property is documented as a CFDataRef, returned unretained (get rule).
        let data = unsafe { CFData::wrap_under_get_rule(data as CFDataRef) };
        Ok((source, data))
    }
}

impl LayoutProvider for CurrentLayout {
    fn translate(&self, key_code: KeyCode) -> Result<Vec<u16>, LayoutError> {
        let virtual_key_code =
            u16::try_from(key_code).map_err(|_| LayoutError::KeyCodeOutOfRange { key_code })?;

        // `_source` keeps the input source alive while its layout bytes are read.
        let (_source, data) = Self::layout_data()?;
        let bytes = data.bytes();
        if bytes.is_empty() {
            return Err(LayoutError::LayoutDataUnavailable);
        }

        let mut dead_key_state: u32 = 0;
        let mut length: usize = 0;
        let mut chars = [0u16; MAX_OUTPUT_UNITS];

        // SAFETY: `bytes` is a UCKeyboardLayout blob owned by `data`; the out-pointers
        // are valid locals and `chars` holds `MAX_OUTPUT_UNITS` units.
        let status = unsafe {
            UCKeyTranslate(
                bytes.as_ptr().cast::<UCKeyboardLayout>(),
                virtual_key_code,
                UC_KEY_ACTION_DISPLAY,
                0,
                u32::from(LMGetKbdType()),
                UC_KEY_TRANSLATE_NO_DEAD_KEYS_MASK,
                &mut dead_key_state,
                chars.len(),
                &mut length,
                chars.as_mut_ptr(),
            )
        };
        check_os_status(status, "UCKeyTranslate")?;

        if dead_key_state != 0 {
            debug!(key_code, dead_key_state, "discarding dead-key state");
        }
        if length == 0 {
            return Err(LayoutError::EmptyOutput);
        }
        Ok(chars[..length.min(chars.len())].to_vec())
    }
}

impl KeyEventSource for NSEvent {
    #[allow(unused_unsafe)]
    fn key_code(&self) -> KeyCode {
        // SAFETY: only called on key events, where `keyCode` is defined.
        KeyCode::from(unsafe { self.keyCode() })
    }

    #[allow(unused_unsafe)]
    fn modifiers(&self) -> ModifierMask {
        // SAFETY: `modifierFlags` is valid for every event type.
        let flags = unsafe { self.modifierFlags() };
        ModifierMask::from_raw_flags(flags.bits() as u64)
    }
}

impl KeyEventSource for CGEvent {
    fn key_code(&self) -> KeyCode {
        self.get_integer_value_field(EventField::KEYBOARD_EVENT_KEYCODE)
    }

    fn modifiers(&self) -> ModifierMask {
        ModifierMask::from_raw_flags(self.get_flags().bits())
    }
}

/// Convert a mask for `NSMenuItem.keyEquivalentModifierMask` and friends.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_ns_modifier_flags(mask: ModifierMask) -> NSEventModifierFlags {
    NSEventModifierFlags::from_bits_retain(mask.bits() as usize)
}
