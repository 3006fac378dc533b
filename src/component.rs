/*!
Typed components of a date-time format pattern.

A [`Component`] describes one formattable unit, such as an hour field, a
month name or a literal string. Each component resolves, independently of
its neighbors, to a [UTS 35] pattern fragment where repeated letters encode
a field's width or style (`"HH"`, `"MMM"` and so on). The two composite
shorthands, [`Component::Time`] and [`Component::Date`], expand into
primitive components before resolution.

Resolution is total over the closed variant set: every combination of styles
has a defined fragment, and the mapping is an exhaustive `match` so that a
new variant without a resolution rule is a compile-time failure.

[UTS 35]: https://unicode.org/reports/tr35/tr35-dates.html#Date_Format_Patterns
*/

use alloc::string::String;

use crate::error::Error;

/// One formattable unit of a date-time format pattern.
///
/// A sequence of components, in the order they should appear in the output,
/// makes up a [`Format`](crate::Format). Components that need a style carry
/// it as payload, always drawn from a closed set, so resolution can never
/// encounter an unsupported combination.
///
/// Separators are components too. Nothing is inserted between fragments
/// implicitly.
///
/// # Example
///
/// ```
/// use datefmt::{component::Component, Format};
///
/// let format = Format::exact([
///     Component::weekday(),
///     Component::comma(),
///     Component::space(),
///     Component::day(),
/// ]);
/// assert_eq!(format.exact_pattern(), "eeee, d");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Component {
    /// Hours and minutes, with optional seconds, separated by colons.
    ///
    /// The 12/24-hour cycle is left to the locale, and an AM/PM marker is
    /// added only by localization, never by this component itself. Prefer
    /// explicit components for interchange formats.
    Time {
        /// Width of the hour field.
        hours: HourWidth,
        /// Whether a seconds field is included.
        seconds: bool,
    },
    /// Hours alone. An AM/PM marker must be requested separately via
    /// [`Component::Period`].
    Hours {
        /// Width of the hour field.
        width: HourWidth,
        /// The 12/24-hour cycle.
        cycle: HourCycle,
    },
    /// Minutes (0...59).
    Minutes(MinuteWidth),
    /// Seconds (0...59).
    Seconds(SecondWidth),
    /// Fractions of a second to the given number of digits.
    ///
    /// The decimal separator is not included. Zero digits resolve to the
    /// empty fragment.
    Subseconds(u8),
    /// The period of a 12-hour clock (AM/PM).
    Period,
    /// A time zone name or offset (PDT, Pacific Daylight Time, +01:00, ...).
    TimeZone(TimeZoneStyle),
    /// Day of month, month, and an optional 4-digit year, separated by
    /// spaces.
    ///
    /// When the month is a padded number, the day is padded too. Prefer
    /// explicit components for interchange formats.
    Date {
        /// Style of the month field.
        month: MonthStyle,
        /// Whether a 4-digit year is appended.
        year: bool,
    },
    /// A weekday name or number.
    Weekday(WeekdayStyle),
    /// Day number in the month (1...31) or year (1...366).
    Day {
        /// Width of the day field.
        width: DayWidth,
        /// The unit the day is counted within.
        of: DayRelation,
    },
    /// Week number in the year (1...53) or month (1...6).
    Week(WeekStyle),
    /// A month name or number.
    Month(MonthStyle),
    /// A quarter name or number.
    Quarter(QuarterStyle),
    /// Year of the day or of the week.
    Year {
        /// Width of the year field.
        width: YearWidth,
        /// The unit whose year is used.
        of: YearRelation,
    },
    /// The name of an era (BC/AD).
    Era(EraStyle),
    /// Arbitrary text that should appear in the output as-is.
    ///
    /// The text is escaped during resolution so its letters are never
    /// interpreted as pattern tokens. Localization may drop it.
    Literal(String),
    /// Raw text spliced into the pattern verbatim, with no escaping.
    ///
    /// Intended for the punctuation separators exposed by
    /// [`Component::space`] and friends, which are only meaningful in exact
    /// formats. Letters in this text *will* be interpreted as pattern
    /// tokens, and localization may drop the text entirely.
    Raw(String),
}

impl Component {
    /// Hours and minutes, both padded to 2 digits, no seconds.
    pub fn time() -> Component {
        Component::Time { hours: HourWidth::Padded, seconds: false }
    }

    /// Hours padded to 2 digits, with the cycle chosen by the locale.
    pub fn hours() -> Component {
        Component::Hours { width: HourWidth::Padded, cycle: HourCycle::Auto }
    }

    /// Minutes padded to 2 digits (00...59).
    pub fn minutes() -> Component {
        Component::Minutes(MinuteWidth::Padded)
    }

    /// Seconds padded to 2 digits (00...59).
    pub fn seconds() -> Component {
        Component::Seconds(SecondWidth::Padded)
    }

    /// Milliseconds (000...999). No decimal separator is included.
    pub fn milliseconds() -> Component {
        Component::Subseconds(3)
    }

    /// Microseconds (000000...999999). No decimal separator is included.
    pub fn microseconds() -> Component {
        Component::Subseconds(6)
    }

    /// Fractions of a second to the given number of digits.
    ///
    /// This is the checked constructor for [`Component::Subseconds`]. The
    /// precision must be in the range `0..=9` (nanosecond precision). Out of
    /// range precisions are rejected here, at construction time, rather than
    /// surfacing later as a malformed pattern.
    ///
    /// # Errors
    ///
    /// This returns an error when `digits` is negative or greater than `9`.
    ///
    /// # Example
    ///
    /// ```
    /// use datefmt::{component::Component, Format};
    ///
    /// let format = Format::exact([
    ///     Component::seconds(),
    ///     Component::dot(),
    ///     Component::subseconds(3)?,
    /// ]);
    /// assert_eq!(format.exact_pattern(), "ss.SSS");
    ///
    /// assert!(Component::subseconds(-1).is_err());
    /// assert!(Component::subseconds(10).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn subseconds(digits: i64) -> Result<Component, Error> {
        match u8::try_from(digits) {
            Ok(digits) if digits <= 9 => Ok(Component::Subseconds(digits)),
            _ => Err(Error::range("subsecond precision", digits, 0, 9)),
        }
    }

    /// The abbreviated name of the time zone (PDT).
    pub fn time_zone() -> Component {
        Component::TimeZone(TimeZoneStyle::ShortName)
    }

    /// Day of month, full month name and a 4-digit year.
    pub fn date() -> Component {
        Component::Date { month: MonthStyle::Name, year: true }
    }

    /// The full name of the weekday (Monday...Sunday).
    pub fn weekday() -> Component {
        Component::Weekday(WeekdayStyle::Name)
    }

    /// Day number in the month, unpadded (1...31).
    pub fn day() -> Component {
        Component::Day { width: DayWidth::Short, of: DayRelation::Month }
    }

    /// Week number in the year, unpadded (1...53).
    pub fn week() -> Component {
        Component::Week(WeekStyle::Short)
    }

    /// The full name of the month (January...December).
    pub fn month() -> Component {
        Component::Month(MonthStyle::Name)
    }

    /// The quarter number prefixed with Q (Q1...Q4).
    pub fn quarter() -> Component {
        Component::Quarter(QuarterStyle::PrefixedNumber)
    }

    /// The 4-digit year of the day.
    pub fn year() -> Component {
        Component::Year { width: YearWidth::Full, of: YearRelation::Day }
    }

    /// The abbreviated name of the era (BC/AD).
    pub fn era() -> Component {
        Component::Era(EraStyle::Short)
    }

    /// Arbitrary text included in the output as-is, escaped so that its
    /// letters are not interpreted as pattern tokens.
    pub fn literal(text: impl Into<String>) -> Component {
        Component::Literal(text.into())
    }

    /// Raw text spliced into the pattern verbatim. See [`Component::Raw`].
    pub fn raw(text: impl Into<String>) -> Component {
        Component::Raw(text.into())
    }

    /// A space separator for exact formats. Localization may remove it.
    pub fn space() -> Component {
        Component::raw(" ")
    }

    /// A dash separator for exact formats. Localization may remove it.
    pub fn dash() -> Component {
        Component::raw("-")
    }

    /// A colon separator for exact formats. Localization may remove it.
    pub fn colon() -> Component {
        Component::raw(":")
    }

    /// A dot separator for exact formats. Localization may remove it.
    pub fn dot() -> Component {
        Component::raw(".")
    }

    /// A slash separator for exact formats. Localization may remove it.
    pub fn slash() -> Component {
        Component::raw("/")
    }

    /// A comma separator for exact formats. Localization may remove it.
    pub fn comma() -> Component {
        Component::raw(",")
    }

    /// An apostrophe separator for exact formats. Localization may remove
    /// it.
    ///
    /// Since the apostrophe is the pattern escape delimiter, it is spliced
    /// in pre-doubled (`''`).
    pub fn apostrophe() -> Component {
        Component::raw("''")
    }

    /// Writes the pattern fragment for this component to `pattern`.
    ///
    /// Composite components expand into primitive components first and
    /// resolve those. Everything else maps directly to its fragment. This
    /// match is intentionally exhaustive with no fallback arm, so a new
    /// variant cannot silently resolve to nothing.
    pub(crate) fn write_pattern(&self, pattern: &mut String) {
        match *self {
            Component::Time { hours, seconds } => {
                let mut parts = alloc::vec![
                    Component::Hours { width: hours, cycle: HourCycle::Auto },
                    Component::colon(),
                    Component::minutes(),
                ];
                if seconds {
                    parts.push(Component::colon());
                    parts.push(Component::seconds());
                }
                // No period component here. For a 12-hour locale, the AM/PM
                // marker is added by localization.
                write_all(&parts, pattern);
            }
            Component::Hours { width, cycle } => {
                pattern.push_str(width.resolve(cycle));
            }
            Component::Minutes(width) => pattern.push_str(width.pattern()),
            Component::Seconds(width) => pattern.push_str(width.pattern()),
            Component::Subseconds(digits) => {
                for _ in 0..digits {
                    pattern.push('S');
                }
            }
            Component::Period => pattern.push('a'),
            Component::TimeZone(style) => pattern.push_str(style.pattern()),
            Component::Date { month, year } => {
                // A padded month makes the day padded too.
                let day = if month == MonthStyle::PaddedNumber {
                    DayWidth::Padded
                } else {
                    DayWidth::Short
                };
                let mut parts = alloc::vec![
                    Component::Day { width: day, of: DayRelation::Month },
                    Component::space(),
                    Component::Month(month),
                ];
                if year {
                    parts.push(Component::space());
                    parts.push(Component::year());
                }
                write_all(&parts, pattern);
            }
            Component::Weekday(style) => pattern.push_str(style.pattern()),
            Component::Day { width, of } => {
                pattern.push_str(width.resolve(of));
            }
            Component::Week(style) => pattern.push_str(style.pattern()),
            Component::Month(style) => pattern.push_str(style.pattern()),
            Component::Quarter(style) => pattern.push_str(style.pattern()),
            Component::Year { width, of } => {
                pattern.push_str(width.resolve(of));
            }
            Component::Era(style) => pattern.push_str(style.pattern()),
            Component::Literal(ref text) => {
                // Interior delimiters are doubled before wrapping, so the
                // escaping is reversible and the fragment never contains an
                // unterminated escape.
                pattern.push('\'');
                for ch in text.chars() {
                    if ch == '\'' {
                        pattern.push('\'');
                    }
                    pattern.push(ch);
                }
                pattern.push('\'');
            }
            Component::Raw(ref text) => pattern.push_str(text),
        }
    }

    /// Whether this component is an explicit request for an AM/PM marker.
    ///
    /// Localization only keeps a period slot in the translated pattern when
    /// some component in the format wants one.
    pub(crate) fn wants_period(&self) -> bool {
        matches!(*self, Component::Period | Component::Time { .. })
    }
}

fn write_all(components: &[Component], pattern: &mut String) {
    for component in components {
        component.write_pattern(pattern);
    }
}

/// The width of an hour field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HourWidth {
    /// 1...12 or 0...23
    Short,
    /// 01...12 or 00...23
    Padded,
    /// 00...23, forcing a 24-hour clock regardless of the requested cycle.
    Standardized,
}

impl HourWidth {
    fn resolve(self, cycle: HourCycle) -> &'static str {
        match (self, cycle) {
            (HourWidth::Short, HourCycle::Auto) => "j",
            (HourWidth::Short, HourCycle::H12) => "h",
            (HourWidth::Short, HourCycle::H24) => "H",
            (HourWidth::Padded, HourCycle::Auto) => "jj",
            (HourWidth::Padded, HourCycle::H12) => "hh",
            (HourWidth::Padded, HourCycle::H24) => "HH",
            (HourWidth::Standardized, _) => "HH",
        }
    }
}

/// The 12/24-hour cycle of an hour field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HourCycle {
    /// Chosen by the locale.
    Auto,
    /// 1...12 or 01...12
    H12,
    /// 0...23 or 00...23
    H24,
}

/// The width of a minute field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MinuteWidth {
    /// 0...59
    Short,
    /// 00...59
    Padded,
}

impl MinuteWidth {
    fn pattern(self) -> &'static str {
        match self {
            MinuteWidth::Short => "m",
            MinuteWidth::Padded => "mm",
        }
    }
}

/// The width of a second field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SecondWidth {
    /// 0...59
    Short,
    /// 00...59
    Padded,
}

impl SecondWidth {
    fn pattern(self) -> &'static str {
        match self {
            SecondWidth::Short => "s",
            SecondWidth::Padded => "ss",
        }
    }
}

/// The style of a weekday field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WeekdayStyle {
    /// 1...7
    Number,
    /// Sunday...Saturday, inflected for use within a date.
    Name,
    /// Sun, Mon, Tue, Wed, Thu, Fri, Sat
    ShortName,
    /// Su, Mo, Tu, We, Th, Fr, Sa
    ShorterName,
    /// S, M, T, W, T, F, S
    Initial,
    /// Sunday...Saturday, standalone.
    Standalone,
    /// Weekday of month: 1...6
    OfMonth,
}

impl WeekdayStyle {
    fn pattern(self) -> &'static str {
        match self {
            WeekdayStyle::Number => "e",
            WeekdayStyle::Name => "eeee",
            WeekdayStyle::ShortName => "eee",
            WeekdayStyle::ShorterName => "eeeeee",
            WeekdayStyle::Initial => "eeeee",
            WeekdayStyle::Standalone => "cccc",
            WeekdayStyle::OfMonth => "F",
        }
    }
}

/// The width of a day field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DayWidth {
    /// 1...31 or 1...366
    Short,
    /// 01...31 or 001...366
    Padded,
}

impl DayWidth {
    fn resolve(self, of: DayRelation) -> &'static str {
        match (self, of) {
            (DayWidth::Short, DayRelation::Month) => "d",
            (DayWidth::Short, DayRelation::Year) => "D",
            (DayWidth::Padded, DayRelation::Month) => "dd",
            (DayWidth::Padded, DayRelation::Year) => "DDD",
        }
    }
}

/// The calendar unit a day number is counted within.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DayRelation {
    /// Day of month: 1...31
    Month,
    /// Day of year: 1...366
    Year,
}

/// The style of a week field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WeekStyle {
    /// Week of year: 1...53
    Short,
    /// Week of year: 01...53
    Padded,
    /// Week of month: 1...6
    OfMonth,
}

impl WeekStyle {
    fn pattern(self) -> &'static str {
        match self {
            WeekStyle::Short => "w",
            WeekStyle::Padded => "ww",
            WeekStyle::OfMonth => "W",
        }
    }
}

/// The style of a month field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MonthStyle {
    /// 1...12
    Number,
    /// 01...12
    PaddedNumber,
    /// January...December, inflected for use within a date.
    Name,
    /// Jan...Dec
    ShortName,
    /// J...D
    Initial,
    /// January...December, standalone.
    Standalone,
}

impl MonthStyle {
    fn pattern(self) -> &'static str {
        match self {
            MonthStyle::Number => "M",
            MonthStyle::PaddedNumber => "MM",
            MonthStyle::Name => "MMMM",
            MonthStyle::ShortName => "MMM",
            MonthStyle::Initial => "MMMMM",
            MonthStyle::Standalone => "LLLL",
        }
    }
}

/// The style of a quarter field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuarterStyle {
    /// 1...4
    Number,
    /// Q1...Q4
    PrefixedNumber,
    /// 1st...4th quarter, inflected for use within a date.
    Name,
    /// 1st...4th quarter, standalone.
    Standalone,
}

impl QuarterStyle {
    fn pattern(self) -> &'static str {
        match self {
            QuarterStyle::Number => "Q",
            QuarterStyle::PrefixedNumber => "QQQ",
            QuarterStyle::Name => "QQQQ",
            QuarterStyle::Standalone => "qqqq",
        }
    }
}

/// The width of a year field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum YearWidth {
    /// 00...99
    Short,
    /// 1900...2099
    Full,
}

impl YearWidth {
    fn resolve(self, of: YearRelation) -> &'static str {
        match (self, of) {
            (YearWidth::Short, YearRelation::Day) => "yy",
            (YearWidth::Short, YearRelation::Week) => "YY",
            (YearWidth::Full, YearRelation::Day) => "yyyy",
            (YearWidth::Full, YearRelation::Week) => "YYYY",
        }
    }
}

/// The calendar unit whose year is used.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum YearRelation {
    /// The year of the day.
    Day,
    /// The year of the week. May differ from the year of the day in the
    /// first and last weeks of a year. Only meaningful alongside week
    /// fields.
    Week,
}

/// The style of an era field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EraStyle {
    /// BC / AD
    Short,
    /// Before Christ / Anno Domini
    Full,
}

impl EraStyle {
    fn pattern(self) -> &'static str {
        match self {
            EraStyle::Short => "G",
            EraStyle::Full => "GGGG",
        }
    }
}

/// The style of a time zone field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeZoneStyle {
    /// The zone name abbreviated, reflecting DST: PDT
    ShortName,
    /// The zone name in full, reflecting DST: Pacific Daylight Time
    LongName,
    /// The zone name abbreviated, ignoring DST: PT
    ShortGeneric,
    /// The zone name in full, ignoring DST: Pacific Time
    LongGeneric,
    /// Los Angeles Time
    Standalone,
    /// Los Angeles
    City,
    /// America/Los_Angeles
    Identifier,
    /// The offset from GMT.
    Offset {
        /// How the offset is rendered.
        style: OffsetStyle,
        /// Whether a zero offset is rendered as `Z`. Ignored by the GMT
        /// styles, which have no `Z` form.
        zulu: bool,
    },
}

impl TimeZoneStyle {
    fn pattern(self) -> &'static str {
        match self {
            TimeZoneStyle::ShortName => "z",
            TimeZoneStyle::LongName => "zzzz",
            TimeZoneStyle::ShortGeneric => "v",
            TimeZoneStyle::LongGeneric => "vvvv",
            TimeZoneStyle::Standalone => "VVVV",
            TimeZoneStyle::City => "VVV",
            TimeZoneStyle::Identifier => "VV",
            TimeZoneStyle::Offset { style, zulu } => style.resolve(zulu),
        }
    }
}

/// The style of a time zone offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OffsetStyle {
    /// +01, or Z when zero
    Short,
    /// +01:00, or Z when zero
    Long,
    /// +0100, or Z when zero
    Compact,
    /// GMT+1
    ShortGmt,
    /// GMT+01:00
    LongGmt,
}

impl OffsetStyle {
    fn resolve(self, zulu: bool) -> &'static str {
        match self {
            OffsetStyle::Short => {
                if zulu {
                    "X"
                } else {
                    "x"
                }
            }
            OffsetStyle::Long => {
                if zulu {
                    "XXX"
                } else {
                    "xxx"
                }
            }
            OffsetStyle::Compact => {
                if zulu {
                    "XX"
                } else {
                    "xx"
                }
            }
            // The GMT styles have no Z form.
            OffsetStyle::ShortGmt => "O",
            OffsetStyle::LongGmt => "OOOO",
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Component {
    fn arbitrary(g: &mut quickcheck::Gen) -> Component {
        let hour_widths = [
            HourWidth::Short,
            HourWidth::Padded,
            HourWidth::Standardized,
        ];
        let hour_cycles = [HourCycle::Auto, HourCycle::H12, HourCycle::H24];
        let month_styles = [
            MonthStyle::Number,
            MonthStyle::PaddedNumber,
            MonthStyle::Name,
            MonthStyle::ShortName,
            MonthStyle::Initial,
            MonthStyle::Standalone,
        ];
        let offset_styles = [
            OffsetStyle::Short,
            OffsetStyle::Long,
            OffsetStyle::Compact,
            OffsetStyle::ShortGmt,
            OffsetStyle::LongGmt,
        ];
        let tz_styles = [
            TimeZoneStyle::ShortName,
            TimeZoneStyle::LongName,
            TimeZoneStyle::ShortGeneric,
            TimeZoneStyle::LongGeneric,
            TimeZoneStyle::Standalone,
            TimeZoneStyle::City,
            TimeZoneStyle::Identifier,
            TimeZoneStyle::Offset {
                style: *g.choose(&offset_styles).unwrap(),
                zulu: bool::arbitrary(g),
            },
        ];
        match u32::arbitrary(g) % 17 {
            0 => Component::Time {
                hours: *g.choose(&hour_widths).unwrap(),
                seconds: bool::arbitrary(g),
            },
            1 => Component::Hours {
                width: *g.choose(&hour_widths).unwrap(),
                cycle: *g.choose(&hour_cycles).unwrap(),
            },
            2 => Component::Minutes(
                *g.choose(&[MinuteWidth::Short, MinuteWidth::Padded])
                    .unwrap(),
            ),
            3 => Component::Seconds(
                *g.choose(&[SecondWidth::Short, SecondWidth::Padded])
                    .unwrap(),
            ),
            4 => Component::Subseconds(u8::arbitrary(g) % 10),
            5 => Component::Period,
            6 => Component::TimeZone(*g.choose(&tz_styles).unwrap()),
            7 => Component::Date {
                month: *g.choose(&month_styles).unwrap(),
                year: bool::arbitrary(g),
            },
            8 => Component::Weekday(
                *g.choose(&[
                    WeekdayStyle::Number,
                    WeekdayStyle::Name,
                    WeekdayStyle::ShortName,
                    WeekdayStyle::ShorterName,
                    WeekdayStyle::Initial,
                    WeekdayStyle::Standalone,
                    WeekdayStyle::OfMonth,
                ])
                .unwrap(),
            ),
            9 => Component::Day {
                width: *g.choose(&[DayWidth::Short, DayWidth::Padded]).unwrap(),
                of: *g.choose(&[DayRelation::Month, DayRelation::Year])
                    .unwrap(),
            },
            10 => Component::Week(
                *g.choose(&[
                    WeekStyle::Short,
                    WeekStyle::Padded,
                    WeekStyle::OfMonth,
                ])
                .unwrap(),
            ),
            11 => Component::Month(*g.choose(&month_styles).unwrap()),
            12 => Component::Quarter(
                *g.choose(&[
                    QuarterStyle::Number,
                    QuarterStyle::PrefixedNumber,
                    QuarterStyle::Name,
                    QuarterStyle::Standalone,
                ])
                .unwrap(),
            ),
            13 => Component::Year {
                width: *g.choose(&[YearWidth::Short, YearWidth::Full]).unwrap(),
                of: *g.choose(&[YearRelation::Day, YearRelation::Week])
                    .unwrap(),
            },
            14 => Component::Era(
                *g.choose(&[EraStyle::Short, EraStyle::Full]).unwrap(),
            ),
            15 => Component::Literal(String::arbitrary(g)),
            _ => Component::Raw(String::arbitrary(g)),
        }
    }
}
