use alloc::{string::String, vec::Vec};

use crate::{
    component::Component,
    format::Format,
    locale::{Locale, Localizer},
};

/// A [`Format`] bound to a concrete locale, resolved to its final pattern.
///
/// This is the hand-off point to a pattern-driven formatting engine: build a
/// `Formatter`, then feed [`Formatter::pattern`] and [`Formatter::locale`]
/// to whatever actually renders dates.
///
/// Two constructions are provided. [`Formatter::posix`] binds an exact
/// format to the invariant POSIX locale, so its output is deterministic and
/// locale independent. [`Formatter::new`] binds a localized format to a
/// caller supplied locale.
///
/// # Example
///
/// ```
/// use datefmt::{component::Component, Formatter};
///
/// let formatter = Formatter::posix([
///     Component::year(),
///     Component::dash(),
///     Component::week(),
/// ]);
/// assert_eq!(formatter.pattern(), "yyyy-w");
/// assert_eq!(formatter.locale().as_str(), "en_US_POSIX");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Formatter {
    locale: Locale,
    pattern: String,
}

impl Formatter {
    /// Creates a formatter using the POSIX locale and an exact format built
    /// from the given components.
    ///
    /// The resulting pattern is byte-for-byte deterministic, suitable for
    /// machine readable timestamps and log lines.
    pub fn posix(components: impl Into<Vec<Component>>) -> Formatter {
        Formatter {
            locale: Locale::POSIX,
            pattern: Format::exact(components).exact_pattern(),
        }
    }

    /// Creates a formatter using the given locale and a localized format
    /// built from the given components, translated via `localizer`.
    ///
    /// # Example
    ///
    /// ```
    /// use datefmt::{
    ///     component::{Component, MonthStyle},
    ///     Formatter, Locale,
    /// };
    ///
    /// let cldr = |template: &str, _: &Locale| -> Option<String> {
    ///     (template == "d MMMM").then(|| "d. MMMM".to_string())
    /// };
    /// let formatter = Formatter::new(
    ///     Locale::new("sk_SK")?,
    ///     [Component::Date { month: MonthStyle::Name, year: false }],
    ///     &cldr,
    /// );
    /// assert_eq!(formatter.pattern(), "d. MMMM");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new<L: Localizer + ?Sized>(
        locale: Locale,
        components: impl Into<Vec<Component>>,
        localizer: &L,
    ) -> Formatter {
        let pattern = Format::localized(components).resolve(&locale, localizer);
        Formatter { locale, pattern }
    }

    /// Returns the resolved pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the locale this formatter is bound to.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Replaces this formatter's pattern by resolving the given format for
    /// its locale.
    pub fn set_format<L: Localizer + ?Sized>(
        &mut self,
        format: &Format,
        localizer: &L,
    ) {
        self.pattern = format.resolve(&self.locale, localizer);
    }

    /// Reconstructs a [`Format`] from this formatter's stored pattern.
    ///
    /// The original component list is not stored, so this is a best-effort
    /// guess and inherently lossy: the whole pattern is wrapped as a single
    /// raw component, and the format is considered localized when this
    /// formatter's locale equals [`Locale::current`]. The guess exists so a
    /// format can be carried from one formatter to another; do not expect to
    /// recover the components that built the pattern.
    #[cfg(feature = "std")]
    pub fn format(&self) -> Format {
        let components = alloc::vec![Component::raw(self.pattern.clone())];
        if self.locale == Locale::current() {
            Format::localized(components)
        } else {
            Format::exact(components)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::locale::PosixLocalizer;

    use super::*;

    #[test]
    fn ok_posix_formatter() {
        let formatter = Formatter::posix([
            Component::year(),
            Component::dash(),
            Component::Month(crate::component::MonthStyle::PaddedNumber),
        ]);
        assert_eq!(formatter.pattern(), "yyyy-MM");
        assert_eq!(formatter.locale(), &Locale::POSIX);
    }

    #[test]
    fn ok_localized_formatter() {
        let cldr = |template: &str, _: &Locale| -> Option<String> {
            (template == "jj:mm").then(|| "HH:mm".to_string())
        };
        let locale = Locale::new("de_DE").unwrap();
        let formatter = Formatter::new(
            locale.clone(),
            [Component::hours(), Component::colon(), Component::minutes()],
            &cldr,
        );
        assert_eq!(formatter.pattern(), "HH:mm");
        assert_eq!(formatter.locale(), &locale);
    }

    #[test]
    fn ok_localized_formatter_falls_back() {
        let formatter = Formatter::new(
            Locale::new("sk_SK").unwrap(),
            [Component::weekday()],
            &PosixLocalizer,
        );
        assert_eq!(formatter.pattern(), "eeee");
    }

    #[test]
    fn ok_set_format() {
        let mut formatter = Formatter::posix([Component::year()]);
        assert_eq!(formatter.pattern(), "yyyy");

        formatter.set_format(&Format::iso_8601(), &PosixLocalizer);
        assert_eq!(formatter.pattern(), "yyyy-MM-dd'T'HH:mm:ssXXX");
    }

    #[cfg(feature = "std")]
    #[test]
    fn ok_format_guess_localized_flag() {
        use std::env;

        let _guard = crate::locale::ENV_LOCK.lock().unwrap();
        let saved = env::var("LC_ALL").ok();
        env::set_var("LC_ALL", "sk_SK");

        // A formatter bound to the current locale guesses localized.
        let formatter = Formatter::new(
            Locale::new("sk_SK").unwrap(),
            [Component::hours()],
            &PosixLocalizer,
        );
        assert!(formatter.format().is_localized());

        // Any other locale guesses exact.
        let formatter = Formatter::new(
            Locale::new("de_DE").unwrap(),
            [Component::hours()],
            &PosixLocalizer,
        );
        assert!(!formatter.format().is_localized());

        match saved {
            Some(value) => env::set_var("LC_ALL", value),
            None => env::remove_var("LC_ALL"),
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn ok_format_guess_is_lossy() {
        let formatter = Formatter::posix([
            Component::hours(),
            Component::colon(),
            Component::minutes(),
        ]);
        let format = formatter.format();
        // The reconstruction is a single raw blob, not the original
        // components.
        assert_eq!(
            format.components(),
            &[Component::raw("jj:mm")],
        );
        assert_eq!(format.exact_pattern(), "jj:mm");
    }
}
