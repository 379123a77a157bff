// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization
//! system. It handles translation bundle loading, per-request translation
//! contexts, and string formatting.
//!
//! # Features
//!
//! - Compile-time embedded `.ftl` translation files, or bundles built from
//!   in-memory sources
//! - A shared, read-only translation store safe for concurrent requests
//! - Per-request current locale, switched at resolution time
//! - Fallback marker when a translation is missing

pub mod fluent;
