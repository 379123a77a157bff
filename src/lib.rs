// SPDX-License-Identifier: MPL-2.0
//! `locale_route` provides locale-selection glue for internationalized web
//! front-ends: a per-request locale resolver with canonical-path redirects,
//! and Fluent-backed translation contexts over a shared message store.
//!
//! The host routing framework supplies the request's path/query locale
//! parameters and maps the resolver's outcome onto its own proceed, redirect,
//! and not-found machinery.

#![doc(html_root_url = "https://docs.rs/locale_route/0.1.0")]

pub mod config;
pub mod error;
pub mod i18n;
pub mod resolver;

pub use error::{Error, Result};
pub use i18n::fluent::{Translations, TranslationContext};
pub use resolver::{resolve, Outcome, RouteRequest};
