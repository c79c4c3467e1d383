//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the copy-phone shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Copy-phone shortcut display for the footer help text
#[cfg(target_os = "macos")]
pub const PHONE_SHORTCUT: &str = "Cmd+T";

#[cfg(not(target_os = "macos"))]
pub const PHONE_SHORTCUT: &str = "Ctrl+T";
