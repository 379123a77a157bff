// SPDX-License-Identifier: MPL-2.0
//! Per-request locale resolution and canonical path redirects.
//!
//! The host routing framework calls [`resolve`] before rendering a page. The
//! resolver picks the effective locale (path parameter, then query parameter,
//! then the store's default), validates it against the supported locale set,
//! records it on the request's [`TranslationContext`], and tells the host
//! whether to proceed, redirect to the canonical path, or serve a 404.
//!
//! Only URLs prefixed with the *default* locale are canonicalized: with
//! default `en`, `/en/about` redirects to `/about` while `/zh/about` is left
//! alone. Prefix matching is segment-exact, so `/ennui` never matches `en`.

use crate::i18n::fluent::TranslationContext;
use unic_langid::LanguageIdentifier;

/// User-facing message carried by the not-found outcome.
pub const NOT_FOUND_MESSAGE: &str = "This page could not be found.";

/// Status signal carried by the not-found outcome.
pub const NOT_FOUND_STATUS: u16 = 404;

/// Locale-relevant slice of an incoming request.
#[derive(Debug, Clone, Default)]
pub struct RouteRequest<'a> {
    /// Locale taken from the route's path parameter, e.g. `/:lang/about`.
    pub path_locale: Option<&'a str>,
    /// Locale taken from the query string, e.g. `?lang=zh`.
    pub query_locale: Option<&'a str>,
    /// Full request path, used for canonicalization.
    pub full_path: &'a str,
    /// Set when the invocation comes from hot-reload or replay machinery
    /// rather than a real request; resolution is skipped entirely.
    pub is_hot_reload: bool,
}

/// Terminal outcome of one resolution. Exactly one per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Locale accepted, path already canonical; let the request through.
    Proceed,
    /// Locale accepted, but the path carries a redundant default-locale
    /// prefix; the host should redirect to `location`.
    Redirect { location: String },
    /// The candidate locale is not supported. Fatal for the request; never
    /// retried, never substituted with a fallback.
    NotFound { message: &'static str, status: u16 },
}

impl Outcome {
    fn not_found() -> Self {
        Outcome::NotFound {
            message: NOT_FOUND_MESSAGE,
            status: NOT_FOUND_STATUS,
        }
    }
}

/// Resolves the effective locale for one request.
///
/// On success the context's current locale is updated — the one side effect
/// of this function. Hot-reload invocations return [`Outcome::Proceed`]
/// without touching any state.
pub fn resolve(request: &RouteRequest<'_>, ctx: &mut TranslationContext) -> Outcome {
    if request.is_hot_reload {
        return Outcome::Proceed;
    }

    let default_code = ctx.translations().default_locale().to_string();
    let candidate = [request.path_locale, request.query_locale]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or(default_code.as_str());

    let locale: LanguageIdentifier = match candidate.parse() {
        Ok(locale) => locale,
        Err(_) => return Outcome::not_found(),
    };
    if !ctx.translations().supports(&locale) {
        return Outcome::not_found();
    }

    log::debug!(
        "resolved locale {} for request path {:?}",
        locale,
        request.full_path
    );

    let is_default = locale == *ctx.translations().default_locale();
    ctx.set_locale(locale);

    if is_default {
        if let Some(location) = strip_default_prefix(request.full_path, &default_code) {
            return Outcome::Redirect { location };
        }
    }
    Outcome::Proceed
}

/// Strips one leading `/<default>` segment, returning the canonical path.
///
/// Matches only when the prefix is a complete segment: the path is exactly
/// `/<default>` (collapses to `/`) or continues with `/`. Occurrences of the
/// default locale elsewhere in the path never match.
fn strip_default_prefix(full_path: &str, default_code: &str) -> Option<String> {
    let rest = full_path.strip_prefix('/')?.strip_prefix(default_code)?;
    if rest.is_empty() {
        Some("/".to_string())
    } else if rest.starts_with('/') {
        Some(rest.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::Translations;
    use std::sync::Arc;

    fn store() -> Arc<Translations> {
        let sources = vec![
            ("en".to_string(), "page-home-title = Home\n".to_string()),
            ("zh".to_string(), "page-home-title = 首页\n".to_string()),
        ];
        Arc::new(Translations::from_sources("en", sources).expect("store should build"))
    }

    #[test]
    fn path_locale_wins_over_query_locale() {
        let store = store();
        let mut ctx = store.context();
        let request = RouteRequest {
            path_locale: Some("zh"),
            query_locale: Some("en"),
            full_path: "/zh/about",
            is_hot_reload: false,
        };
        assert_eq!(resolve(&request, &mut ctx), Outcome::Proceed);
        assert_eq!(ctx.current_locale().to_string(), "zh");
    }

    #[test]
    fn query_locale_used_when_path_locale_absent() {
        let store = store();
        let mut ctx = store.context();
        let request = RouteRequest {
            path_locale: None,
            query_locale: Some("zh"),
            full_path: "/about",
            is_hot_reload: false,
        };
        assert_eq!(resolve(&request, &mut ctx), Outcome::Proceed);
        assert_eq!(ctx.current_locale().to_string(), "zh");
    }

    #[test]
    fn empty_path_locale_falls_through_to_query() {
        let store = store();
        let mut ctx = store.context();
        let request = RouteRequest {
            path_locale: Some(""),
            query_locale: Some("zh"),
            full_path: "/about",
            is_hot_reload: false,
        };
        assert_eq!(resolve(&request, &mut ctx), Outcome::Proceed);
        assert_eq!(ctx.current_locale().to_string(), "zh");
    }

    #[test]
    fn unsupported_locale_is_not_found() {
        let store = store();
        let mut ctx = store.context();
        let request = RouteRequest {
            path_locale: Some("fr"),
            query_locale: None,
            full_path: "/fr/about",
            is_hot_reload: false,
        };
        assert_eq!(
            resolve(&request, &mut ctx),
            Outcome::NotFound {
                message: NOT_FOUND_MESSAGE,
                status: 404,
            }
        );
        // No mutation on the not-found branch.
        assert_eq!(ctx.current_locale().to_string(), "en");
    }

    #[test]
    fn unparsable_locale_is_not_found() {
        let store = store();
        let mut ctx = store.context();
        let request = RouteRequest {
            path_locale: Some("not a locale"),
            query_locale: None,
            full_path: "/about",
            is_hot_reload: false,
        };
        assert!(matches!(
            resolve(&request, &mut ctx),
            Outcome::NotFound { status: 404, .. }
        ));
    }

    #[test]
    fn default_prefixed_path_redirects_to_stripped_path() {
        let store = store();
        let mut ctx = store.context();
        let request = RouteRequest {
            path_locale: None,
            query_locale: None,
            full_path: "/en/about",
            is_hot_reload: false,
        };
        assert_eq!(
            resolve(&request, &mut ctx),
            Outcome::Redirect {
                location: "/about".to_string(),
            }
        );
    }

    #[test]
    fn bare_default_prefix_collapses_to_root() {
        let store = store();
        let mut ctx = store.context();
        let request = RouteRequest {
            path_locale: None,
            query_locale: None,
            full_path: "/en",
            is_hot_reload: false,
        };
        assert_eq!(
            resolve(&request, &mut ctx),
            Outcome::Redirect {
                location: "/".to_string(),
            }
        );
    }

    #[test]
    fn non_default_locale_is_never_canonicalized() {
        let store = store();
        let mut ctx = store.context();
        let request = RouteRequest {
            path_locale: Some("zh"),
            query_locale: None,
            full_path: "/zh/about",
            is_hot_reload: false,
        };
        assert_eq!(resolve(&request, &mut ctx), Outcome::Proceed);
    }

    #[test]
    fn default_locale_segment_elsewhere_does_not_redirect() {
        let store = store();
        let mut ctx = store.context();
        let request = RouteRequest {
            path_locale: None,
            query_locale: None,
            full_path: "/docs/en/about",
            is_hot_reload: false,
        };
        assert_eq!(resolve(&request, &mut ctx), Outcome::Proceed);
    }

    #[test]
    fn partial_segment_match_does_not_redirect() {
        let store = store();
        let mut ctx = store.context();
        let request = RouteRequest {
            path_locale: None,
            query_locale: None,
            full_path: "/ennui",
            is_hot_reload: false,
        };
        assert_eq!(resolve(&request, &mut ctx), Outcome::Proceed);
    }

    #[test]
    fn empty_path_proceeds() {
        let store = store();
        let mut ctx = store.context();
        let request = RouteRequest {
            path_locale: None,
            query_locale: None,
            full_path: "",
            is_hot_reload: false,
        };
        assert_eq!(resolve(&request, &mut ctx), Outcome::Proceed);
        assert_eq!(ctx.current_locale().to_string(), "en");
    }

    #[test]
    fn hot_reload_short_circuits_without_mutation() {
        let store = store();
        let mut ctx = store.context();
        let request = RouteRequest {
            path_locale: Some("fr"),
            query_locale: Some("zh"),
            full_path: "/en/about",
            is_hot_reload: true,
        };
        assert_eq!(resolve(&request, &mut ctx), Outcome::Proceed);
        assert_eq!(ctx.current_locale().to_string(), "en");
    }

    #[test]
    fn resolution_is_idempotent() {
        let store = store();
        let mut ctx = store.context();
        let request = RouteRequest {
            path_locale: Some("zh"),
            query_locale: None,
            full_path: "/zh/about",
            is_hot_reload: false,
        };
        let first = resolve(&request, &mut ctx);
        let locale_after_first = ctx.current_locale().clone();
        let second = resolve(&request, &mut ctx);
        assert_eq!(first, second);
        assert_eq!(*ctx.current_locale(), locale_after_first);
    }

    #[test]
    fn supported_locales_never_produce_not_found() {
        let store = store();
        for code in ["en", "zh"] {
            let mut ctx = store.context();
            let request = RouteRequest {
                path_locale: Some(code),
                query_locale: None,
                full_path: "/",
                is_hot_reload: false,
            };
            assert!(!matches!(
                resolve(&request, &mut ctx),
                Outcome::NotFound { .. }
            ));
        }
    }
}
