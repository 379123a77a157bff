// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use crate::error::{Error, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Immutable store of message bundles, one per supported locale.
///
/// Built once at startup and shared (via `Arc`) across all requests. The
/// bundle map and locale list never change after construction, so concurrent
/// reads need no synchronization; per-request mutable state lives in
/// [`TranslationContext`] instead.
pub struct Translations {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    default_locale: LanguageIdentifier,
}

impl Translations {
    /// Builds the store from the `.ftl` files embedded under `assets/i18n/`.
    ///
    /// Fails with [`Error::MissingDefaultBundle`] when no embedded file covers
    /// `default_locale` — a store without its fallback is a configuration
    /// error, fatal at startup.
    pub fn from_embedded(default_locale: &str) -> Result<Self> {
        Self::from_sources(default_locale, embedded_sources())
    }

    /// Builds the store from embedded assets, restricted to the configured
    /// supported locale set and seeded with the configured default locale.
    pub fn from_config(config: &Config) -> Result<Self> {
        let supported = config.effective_supported_locales();
        let sources = embedded_sources()
            .into_iter()
            .filter(|(code, _)| supported.contains(code));
        Self::from_sources(config.effective_default_locale(), sources)
    }

    /// Builds the store from already-in-memory `(locale code, FTL source)`
    /// pairs, preserving their order as the supported locale set.
    pub fn from_sources<I>(default_locale: &str, sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for (code, source) in sources {
            let locale: LanguageIdentifier = code
                .parse()
                .map_err(|_| Error::Config(format!("invalid locale code: {}", code)))?;
            let res = FluentResource::try_new(source).map_err(|(_, errors)| {
                Error::Resource(format!("failed to parse FTL for {}: {:?}", code, errors))
            })?;
            let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
            bundle.add_resource(res).map_err(|errors| {
                Error::Resource(format!("failed to add resource for {}: {:?}", code, errors))
            })?;
            if bundles.insert(locale.clone(), bundle).is_none() {
                available_locales.push(locale);
            }
        }

        let default_locale: LanguageIdentifier = default_locale
            .parse()
            .map_err(|_| Error::Config(format!("invalid default locale: {}", default_locale)))?;
        if !bundles.contains_key(&default_locale) {
            return Err(Error::MissingDefaultBundle(default_locale.to_string()));
        }

        Ok(Self {
            bundles,
            available_locales,
            default_locale,
        })
    }

    /// Locales with a message bundle, in load order.
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn default_locale(&self) -> &LanguageIdentifier {
        &self.default_locale
    }

    pub fn supports(&self, locale: &LanguageIdentifier) -> bool {
        self.bundles.contains_key(locale)
    }

    /// Creates a per-request context seeded with the default locale.
    pub fn context(self: &Arc<Self>) -> TranslationContext {
        let current = self.default_locale.clone();
        TranslationContext {
            translations: Arc::clone(self),
            current,
        }
    }

    /// Creates a per-request context seeded with `locale`, falling back to the
    /// default locale when `locale` has no bundle.
    pub fn context_with(self: &Arc<Self>, locale: LanguageIdentifier) -> TranslationContext {
        let mut ctx = self.context();
        ctx.set_locale(locale);
        ctx
    }
}

fn embedded_sources() -> Vec<(String, String)> {
    let mut sources = Vec::new();
    for file in Asset::iter() {
        let filename = file.as_ref();
        if let Some(locale_str) = filename.strip_suffix(".ftl") {
            if let Some(content) = Asset::get(filename) {
                sources.push((
                    locale_str.to_string(),
                    String::from_utf8_lossy(content.data.as_ref()).to_string(),
                ));
            }
        }
    }
    sources
}

/// Per-request view over a shared [`Translations`] store.
///
/// Holds the only mutable piece of translation state, the current locale, so
/// one request's locale can never leak into another's render.
pub struct TranslationContext {
    translations: Arc<Translations>,
    current: LanguageIdentifier,
}

impl TranslationContext {
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current
    }

    pub fn translations(&self) -> &Arc<Translations> {
        &self.translations
    }

    /// Switches the current locale. Locales without a bundle are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.translations.bundles.contains_key(&locale) {
            self.current = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.translations.bundles.get(&self.current) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Picks the starting locale for a fresh context.
///
/// Priority: configured default, then the OS locale, then `None` (caller
/// falls back to the built-in default).
pub fn detect_initial_locale(
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check the settings file
    if let Some(lang_str) = &config.default_locale {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check the OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
