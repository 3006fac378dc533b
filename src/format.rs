use alloc::{string::String, vec::Vec};

use crate::{
    component::{
        Component, DayRelation, DayWidth, HourCycle, HourWidth, MonthStyle,
        OffsetStyle, TimeZoneStyle, WeekdayStyle, YearRelation, YearWidth,
    },
    locale::{Locale, Localizer},
};

/// The translated-pattern substring that marks an AM/PM slot.
///
/// Template-to-pattern generators in the CLDR mold render an hour field's
/// period as a space followed by the period token. Detecting it by substring
/// search is knowingly fragile: an escaped literal could contain the same
/// byte sequence. This crate accepts that limitation rather than growing a
/// full pattern parser.
const PERIOD_MARKER: &str = " a";

/// An ordered sequence of [`Component`]s plus a localization flag.
///
/// A `Format` is an immutable value: build it once from components, then
/// [`resolve`](Format::resolve) it to a pattern string as many times as
/// needed. Distinct `Format` values may be resolved concurrently without
/// coordination.
///
/// An *exact* format (from [`Format::exact`]) resolves to the concatenation
/// of its components' fragments, byte-for-byte identical in every locale. A
/// *localized* format (from [`Format::localized`]) additionally runs the
/// assembled pattern through a [`Localizer`] and reconciles the AM/PM marker
/// with what the components asked for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Format {
    components: Vec<Component>,
    localized: bool,
}

impl Format {
    /// Creates a non-localized format that is used exactly as specified.
    pub fn exact(components: impl Into<Vec<Component>>) -> Format {
        Format { components: components.into(), localized: false }
    }

    /// Creates a localized format that is adjusted for the target locale
    /// before use.
    pub fn localized(components: impl Into<Vec<Component>>) -> Format {
        Format { components: components.into(), localized: true }
    }

    /// The predefined [ISO 8601] interchange format, e.g.
    /// `2019-05-08T09:02:06+02:00`.
    ///
    /// [ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html
    ///
    /// # Example
    ///
    /// ```
    /// use datefmt::Format;
    ///
    /// assert_eq!(
    ///     Format::iso_8601().exact_pattern(),
    ///     "yyyy-MM-dd'T'HH:mm:ssXXX",
    /// );
    /// ```
    pub fn iso_8601() -> Format {
        Format::exact([
            Component::Year { width: YearWidth::Full, of: YearRelation::Day },
            Component::dash(),
            Component::Month(MonthStyle::PaddedNumber),
            Component::dash(),
            Component::Day { width: DayWidth::Padded, of: DayRelation::Month },
            Component::literal("T"),
            Component::Hours {
                width: HourWidth::Standardized,
                cycle: HourCycle::H24,
            },
            Component::colon(),
            Component::minutes(),
            Component::colon(),
            Component::seconds(),
            Component::TimeZone(TimeZoneStyle::Offset {
                style: OffsetStyle::Long,
                zulu: true,
            }),
        ])
    }

    /// The predefined HTTP ([RFC 1123] style) interchange format, e.g.
    /// `Fri, 05 Aug 2019 09:02 GMT`.
    ///
    /// [RFC 1123]: https://datatracker.ietf.org/doc/html/rfc1123
    ///
    /// # Example
    ///
    /// ```
    /// use datefmt::Format;
    ///
    /// assert_eq!(
    ///     Format::http().exact_pattern(),
    ///     "eee, dd MMM yyyy HH:mm'GMT'",
    /// );
    /// ```
    pub fn http() -> Format {
        Format::exact([
            Component::Weekday(WeekdayStyle::ShortName),
            Component::comma(),
            Component::space(),
            Component::Day { width: DayWidth::Padded, of: DayRelation::Month },
            Component::space(),
            Component::Month(MonthStyle::ShortName),
            Component::space(),
            Component::Year { width: YearWidth::Full, of: YearRelation::Day },
            Component::space(),
            Component::Hours {
                width: HourWidth::Standardized,
                cycle: HourCycle::H24,
            },
            Component::colon(),
            Component::minutes(),
            Component::literal("GMT"),
        ])
    }

    /// Returns the components of this format, in resolution order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Returns true when resolving this format translates the pattern for
    /// the target locale.
    pub fn is_localized(&self) -> bool {
        self.localized
    }

    /// Assembles the exact pattern: each component's fragment, concatenated
    /// in declaration order with nothing in between.
    ///
    /// This is the final pattern for an exact format and the translation
    /// template for a localized one.
    pub fn exact_pattern(&self) -> String {
        let mut pattern = String::new();
        for component in &self.components {
            component.write_pattern(&mut pattern);
        }
        pattern
    }

    /// Resolves this format to its final pattern string for the given
    /// locale.
    ///
    /// For an exact format, this is [`exact_pattern`](Format::exact_pattern)
    /// and both `locale` and `localizer` are ignored. For a localized
    /// format, the exact pattern is handed to the `localizer` as a template
    /// and the translated pattern is adjusted for AM/PM presence: a period
    /// slot the translator added unsolicited is stripped, while a period
    /// slot the translator *omitted* is respected, since the locale may
    /// genuinely use a 24-hour clock.
    ///
    /// Translator failure is not an error. The exact pattern is returned
    /// unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use datefmt::{component::Component, Format, Locale};
    ///
    /// let format = Format::localized([Component::hours()]);
    /// // An hour-only template, expanded by a 12-hour locale's translator,
    /// // picks up a period slot that was never asked for. It is stripped.
    /// let cldr = |_: &str, _: &Locale| Some("h a".to_string());
    /// assert_eq!(format.resolve(&Locale::new("en_US")?, &cldr), "h");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn resolve<L: Localizer + ?Sized>(
        &self,
        locale: &Locale,
        localizer: &L,
    ) -> String {
        let pattern = self.exact_pattern();
        if !self.localized {
            return pattern;
        }
        let Some(localized) = localizer.localize(&pattern, locale) else {
            warn!(
                "no localized pattern for template {pattern:?} \
                 in locale {locale}, using exact pattern",
            );
            return pattern;
        };
        trace!(
            "localized template {pattern:?} to {localized:?} \
             in locale {locale}",
        );
        let wants_period =
            self.components.iter().any(Component::wants_period);
        if !wants_period && localized.contains(PERIOD_MARKER) {
            // The translator added an AM/PM slot unsolicited. Remove every
            // occurrence, not just the first.
            return localized.replace(PERIOD_MARKER, "");
        }
        localized
    }
}

#[cfg(test)]
mod tests {
    use alloc::{borrow::ToOwned, string::ToString, vec};

    use crate::{component::*, locale::PosixLocalizer};

    use super::*;

    #[test]
    fn ok_iso_8601() {
        let _ = env_logger::try_init();

        let format = Format::iso_8601();
        assert!(!format.is_localized());
        insta::assert_snapshot!(
            format.exact_pattern(),
            @"yyyy-MM-dd'T'HH:mm:ssXXX"
        );
        // Exact formats resolve identically in every locale.
        assert_eq!(
            format.resolve(&Locale::POSIX, &PosixLocalizer),
            format.exact_pattern(),
        );
    }

    #[test]
    fn ok_http() {
        let format = Format::http();
        assert!(!format.is_localized());
        insta::assert_snapshot!(
            format.exact_pattern(),
            @"eee, dd MMM yyyy HH:mm'GMT'"
        );
    }

    #[test]
    fn ok_order_preserved() {
        let format = Format::exact([
            Component::year(),
            Component::dash(),
            Component::week(),
            Component::dash(),
            Component::Weekday(WeekdayStyle::Number),
            Component::space(),
            Component::time(),
            Component::literal("end"),
        ]);
        insta::assert_snapshot!(
            format.exact_pattern(),
            @"yyyy-w-e jj:mm'end'"
        );
    }

    #[test]
    fn ok_localize_translates() {
        let cldr = |template: &str, locale: &Locale| -> Option<String> {
            assert_eq!(template, "d MMMM yyyy");
            assert_eq!(locale.as_str(), "sk_SK");
            Some("d. MMMM yyyy".to_string())
        };
        let format = Format::localized([Component::date()]);
        let locale = Locale::new("sk_SK").unwrap();
        assert_eq!(format.resolve(&locale, &cldr), "d. MMMM yyyy");
    }

    #[test]
    fn ok_localize_failure_falls_back_to_exact() {
        let format = Format::localized([
            Component::time(),
            Component::space(),
            Component::time_zone(),
        ]);
        let locale = Locale::new("sk_SK").unwrap();
        assert_eq!(format.resolve(&locale, &PosixLocalizer), "jj:mm z");
    }

    #[test]
    fn ok_localize_strips_unsolicited_period() {
        // Hours only: no Time composite and no Period component, so the
        // format does not want an AM/PM marker.
        let format = Format::localized([
            Component::Hours {
                width: HourWidth::Short,
                cycle: HourCycle::Auto,
            },
            Component::colon(),
            Component::minutes(),
        ]);
        let cldr =
            |_: &str, _: &Locale| -> Option<String> { Some("h:mm a".to_owned()) };
        let locale = Locale::new("en_US").unwrap();
        assert_eq!(format.resolve(&locale, &cldr), "h:mm");
    }

    #[test]
    fn ok_localize_strips_every_period_occurrence() {
        let format = Format::localized([Component::hours()]);
        let cldr = |_: &str, _: &Locale| -> Option<String> {
            Some("h a (h a)".to_owned())
        };
        let locale = Locale::new("en_US").unwrap();
        assert_eq!(format.resolve(&locale, &cldr), "h (h)");
    }

    #[test]
    fn ok_localize_keeps_requested_period() {
        let format = Format::localized([Component::time()]);
        let cldr =
            |_: &str, _: &Locale| -> Option<String> { Some("h:mm a".to_owned()) };
        let locale = Locale::new("en_US").unwrap();
        assert_eq!(format.resolve(&locale, &cldr), "h:mm a");
    }

    #[test]
    fn ok_localize_never_adds_period() {
        // The asymmetry is deliberate: when the format wants a period but
        // the locale's translator omits it, the locale wins. A genuinely
        // 24-hour locale has no AM/PM to show.
        let format = Format::localized([Component::time()]);
        let cldr =
            |_: &str, _: &Locale| -> Option<String> { Some("HH:mm".to_owned()) };
        let locale = Locale::new("de_DE").unwrap();
        assert_eq!(format.resolve(&locale, &cldr), "HH:mm");
    }

    #[test]
    fn ok_localize_untouched_without_period_anywhere() {
        // Idempotence: nothing wanted, nothing produced, nothing changed.
        let format = Format::localized([Component::weekday()]);
        let cldr =
            |_: &str, _: &Locale| -> Option<String> { Some("cccc".to_owned()) };
        let locale = Locale::new("sk_SK").unwrap();
        assert_eq!(format.resolve(&locale, &cldr), "cccc");
    }

    #[test]
    fn ok_localize_empty_translation_propagates() {
        let format = Format::localized([Component::month()]);
        let cldr =
            |_: &str, _: &Locale| -> Option<String> { Some(String::new()) };
        let locale = Locale::new("en_US").unwrap();
        assert_eq!(format.resolve(&locale, &cldr), "");
    }

    #[test]
    fn ok_empty_component_list() {
        assert_eq!(Format::exact(vec![]).exact_pattern(), "");
        assert_eq!(
            Format::localized(vec![]).resolve(&Locale::POSIX, &PosixLocalizer),
            "",
        );
    }

    quickcheck::quickcheck! {
        // Assembly is plain concatenation: resolving components one at a
        // time and gluing the fragments together gives the same pattern as
        // resolving the whole list, in the same order.
        fn prop_assembly_is_concatenation(components: Vec<Component>) -> bool {
            let whole = Format::exact(components.clone()).exact_pattern();
            let parts = components
                .iter()
                .map(|c| Format::exact(vec![c.clone()]).exact_pattern())
                .collect::<String>();
            whole == parts
        }

        // An exact format ignores the localizer entirely.
        fn prop_exact_ignores_locale(components: Vec<Component>) -> bool {
            let format = Format::exact(components);
            let loud = |_: &str, _: &Locale| -> Option<String> {
                Some("BOGUS".to_owned())
            };
            format.resolve(&Locale::POSIX, &loud) == format.exact_pattern()
        }
    }
}
