use alloc::{borrow::Cow, string::String};

use crate::error::{err, Error};

/// An identifier for a set of regional formatting conventions.
///
/// A `Locale` is a normalized tag like `en_US` or `sk_SK`: hyphens are
/// folded to underscores and any codeset or modifier suffix (`.UTF-8`,
/// `@euro`) is dropped, so tags from BCP 47 sources and POSIX environment
/// variables compare equal.
///
/// This crate attaches no meaning to the tag itself. It is passed through to
/// the [`Localizer`] doing the actual locale-aware work.
///
/// # Example
///
/// ```
/// use datefmt::Locale;
///
/// let locale = Locale::new("en-US.UTF-8")?;
/// assert_eq!(locale.as_str(), "en_US");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Locale {
    tag: Cow<'static, str>,
}

impl Locale {
    /// The invariant POSIX locale.
    ///
    /// Formats resolved for this locale are deterministic and independent of
    /// any user preference, which makes them suitable for machine readable
    /// timestamps and log lines.
    pub const POSIX: Locale = Locale { tag: Cow::Borrowed("en_US_POSIX") };

    /// Creates a locale from the given tag, normalizing it.
    ///
    /// # Errors
    ///
    /// This returns an error when the tag is empty, or is empty after
    /// normalization.
    pub fn new(tag: &str) -> Result<Locale, Error> {
        let normalized = normalize(tag);
        if normalized.is_empty() {
            return Err(err!("locale tag {tag:?} is empty"));
        }
        Ok(Locale { tag: Cow::Owned(normalized) })
    }

    /// Returns the user's current locale, according to the environment.
    ///
    /// This checks `LC_ALL`, `LC_TIME` and `LANG`, in that order, and falls
    /// back to [`Locale::POSIX`] when none of them yields a usable tag. The
    /// special tags `C` and `POSIX` map to [`Locale::POSIX`].
    #[cfg(feature = "std")]
    pub fn current() -> Locale {
        for name in ["LC_ALL", "LC_TIME", "LANG"] {
            let Ok(value) = std::env::var(name) else { continue };
            let Ok(locale) = Locale::new(&value) else { continue };
            if matches!(locale.as_str(), "C" | "POSIX") {
                return Locale::POSIX;
            }
            return locale;
        }
        Locale::POSIX
    }

    /// Returns the normalized tag as a string.
    pub fn as_str(&self) -> &str {
        &self.tag
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.as_str(), f)
    }
}

/// Normalizes a locale tag: cuts any codeset/modifier suffix and folds
/// hyphens to underscores.
fn normalize(tag: &str) -> String {
    let tag = tag.trim();
    let end = tag.find(&['.', '@'][..]).unwrap_or(tag.len());
    tag[..end].replace('-', "_")
}

#[cfg(feature = "serde")]
impl serde::Serialize for Locale {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Locale {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Locale, D::Error> {
        struct LocaleVisitor;

        impl<'de> serde::de::Visitor<'de> for LocaleVisitor {
            type Value = Locale;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a locale tag string")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                value: &str,
            ) -> Result<Locale, E> {
                Locale::new(value).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(LocaleVisitor)
    }
}

/// A template-to-pattern translator for a locale.
///
/// This is the seam between this crate and a locale database. Given an exact
/// pattern as a template, an implementation returns the pattern adjusted to
/// the conventions of the given locale: reordered fields, locale
/// appropriate separators, an AM/PM marker where the locale's clock calls
/// for one. A CLDR-backed "available formats" lookup is the canonical
/// implementation.
///
/// Failure is represented by `None` and is always recoverable: resolution
/// falls back to the exact pattern.
///
/// Any `Fn(&str, &Locale) -> Option<String>` closure is a `Localizer`, which
/// keeps stubbing simple:
///
/// ```
/// use datefmt::{component::Component, Format, Locale};
///
/// let upstream = |template: &str, _: &Locale| -> Option<String> {
///     (template == "MMMM").then(|| "LLLL".to_string())
/// };
/// let format = Format::localized([Component::month()]);
/// assert_eq!(format.resolve(&Locale::new("fi_FI")?, &upstream), "LLLL");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Localizer {
    /// Translates the given exact-pattern template for the given locale, or
    /// returns `None` when the locale is unsupported or translation fails.
    fn localize(&self, template: &str, locale: &Locale) -> Option<String>;
}

impl<F> Localizer for F
where
    F: Fn(&str, &Locale) -> Option<String>,
{
    fn localize(&self, template: &str, locale: &Locale) -> Option<String> {
        (self)(template, locale)
    }
}

/// A [`Localizer`] with no locale data at all.
///
/// Every lookup fails, so every resolution falls back to the exact pattern.
/// Useful as the translator for systems that only ever deal in POSIX-locale
/// machine formats.
#[derive(Clone, Copy, Debug, Default)]
pub struct PosixLocalizer;

impl Localizer for PosixLocalizer {
    fn localize(&self, _template: &str, _locale: &Locale) -> Option<String> {
        None
    }
}

/// Serializes tests that read or write the locale environment variables.
///
/// The environment is process global, so tests touching `LC_ALL` and
/// friends must not run concurrently with each other.
#[cfg(all(test, feature = "std"))]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_normalize() {
        let f = |tag| Locale::new(tag).unwrap();

        assert_eq!(f("en_US").as_str(), "en_US");
        assert_eq!(f("en-US").as_str(), "en_US");
        assert_eq!(f("sk_SK.UTF-8").as_str(), "sk_SK");
        assert_eq!(f("de_DE@euro").as_str(), "de_DE");
        assert_eq!(f(" en_GB ").as_str(), "en_GB");
        assert_eq!(f("C").as_str(), "C");
    }

    #[test]
    fn err_empty() {
        assert!(Locale::new("").is_err());
        assert!(Locale::new("   ").is_err());
        assert!(Locale::new(".UTF-8").is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn ok_current_env_precedence() {
        use std::env;

        let _guard = ENV_LOCK.lock().unwrap();
        let saved = ["LC_ALL", "LC_TIME", "LANG"]
            .map(|name| (name, env::var(name).ok()));

        env::set_var("LC_ALL", "sk_SK.UTF-8");
        env::set_var("LC_TIME", "de_DE");
        env::set_var("LANG", "fi_FI");
        assert_eq!(Locale::current().as_str(), "sk_SK");

        env::remove_var("LC_ALL");
        assert_eq!(Locale::current().as_str(), "de_DE");

        env::remove_var("LC_TIME");
        assert_eq!(Locale::current().as_str(), "fi_FI");

        env::remove_var("LANG");
        assert_eq!(Locale::current(), Locale::POSIX);

        // The special C and POSIX tags map to the invariant locale.
        env::set_var("LC_ALL", "C");
        assert_eq!(Locale::current(), Locale::POSIX);
        env::set_var("LC_ALL", "POSIX");
        assert_eq!(Locale::current(), Locale::POSIX);
        env::set_var("LC_ALL", "C.UTF-8");
        assert_eq!(Locale::current(), Locale::POSIX);

        // An unusable tag is skipped, and the chain keeps going.
        env::set_var("LC_ALL", " ");
        env::set_var("LC_TIME", "en_GB");
        assert_eq!(Locale::current().as_str(), "en_GB");

        for (name, value) in saved {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
    }

    #[test]
    fn ok_posix_constant() {
        assert_eq!(Locale::POSIX.as_str(), "en_US_POSIX");
        assert_eq!(Locale::new("en-US-POSIX").unwrap(), Locale::POSIX);
    }

    #[test]
    fn ok_posix_localizer() {
        assert_eq!(
            PosixLocalizer.localize("jj:mm", &Locale::POSIX),
            None,
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ok_serde_round_trip() {
        let locale = Locale::new("sk_SK").unwrap();
        let json = serde_json::to_string(&locale).unwrap();
        assert_eq!(json, "\"sk_SK\"");
        let got: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(got, locale);

        // Deserialization normalizes too.
        let got: Locale = serde_json::from_str("\"sk-SK.UTF-8\"").unwrap();
        assert_eq!(got, locale);

        assert!(serde_json::from_str::<Locale>("\"\"").is_err());
    }
}
