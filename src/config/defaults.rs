// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the locale configuration.
//!
//! This module is the single source of truth for the fallback locale and the
//! supported locale set used when the settings file does not override them.

/// Locale used when neither the request nor the configuration names one.
pub const DEFAULT_LOCALE: &str = "en";

/// Locales the application ships message bundles for, in display order.
pub const DEFAULT_SUPPORTED_LOCALES: &[&str] = &["en", "zh"];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn supported_contains_default() -> bool {
    let mut i = 0;
    while i < DEFAULT_SUPPORTED_LOCALES.len() {
        if str_eq(DEFAULT_SUPPORTED_LOCALES[i], DEFAULT_LOCALE) {
            return true;
        }
        i += 1;
    }
    false
}

const _: () = {
    assert!(!DEFAULT_LOCALE.is_empty());
    assert!(!DEFAULT_SUPPORTED_LOCALES.is_empty());
    // The fallback must always be resolvable.
    assert!(supported_contains_default());
};
