/*!
A typed builder for Unicode date-time format patterns.

This crate models the [UTS 35 date format pattern] mini-language as a closed
set of typed [`Component`] values. A sequence of components is assembled into
a [`Format`], and a `Format` resolves to a pattern string such as
`yyyy-MM-dd'T'HH:mm:ssXXX`. Resolution is a pure, total function: every
component maps to exactly one pattern fragment, and fragments are
concatenated in declaration order.

A `Format` comes in two flavors. An *exact* format resolves to the same
pattern bytes everywhere. A *localized* format is first handed to an external
template-to-pattern translator (the [`Localizer`] trait, typically backed by
CLDR data) and the result is adjusted so that an AM/PM marker only appears
when one was asked for.

This crate does not format actual dates. It only produces pattern strings for
a pattern-driven formatting engine to consume.

[UTS 35 date format pattern]: https://unicode.org/reports/tr35/tr35-dates.html#Date_Format_Patterns

# Example

Build an exact pattern out of typed components:

```
use datefmt::{
    component::{Component, DayRelation, DayWidth, MonthStyle},
    Format,
};

let format = Format::exact([
    Component::year(),
    Component::dash(),
    Component::Month(MonthStyle::PaddedNumber),
    Component::dash(),
    Component::Day { width: DayWidth::Padded, of: DayRelation::Month },
]);
assert_eq!(format.exact_pattern(), "yyyy-MM-dd");
```

The two predefined interchange formats are available as constructors:

```
use datefmt::Format;

assert_eq!(Format::iso_8601().exact_pattern(), "yyyy-MM-dd'T'HH:mm:ssXXX");
assert_eq!(Format::http().exact_pattern(), "eee, dd MMM yyyy HH:mm'GMT'");
```

# Example: localization

A localized format asks a [`Localizer`] for the locale's rendition of the
exact pattern. Any closure with the right shape works, which makes it easy to
plug in a real CLDR-backed translator (or a stub):

```
use datefmt::{component::Component, Format, Locale};

let format = Format::localized([
    Component::hours(),
    Component::colon(),
    Component::minutes(),
]);

// A 24-hour-clock locale's translator, which never emits an AM/PM slot.
let cldr = |template: &str, _: &Locale| -> Option<String> {
    assert_eq!(template, "jj:mm");
    Some("HH:mm".to_string())
};
let locale = Locale::new("de_DE")?;
assert_eq!(format.resolve(&locale, &cldr), "HH:mm");

# Ok::<(), Box<dyn std::error::Error>>(())
```

When the translator fails, resolution degrades to the exact pattern instead
of reporting an error:

```
use datefmt::{component::Component, Format, Locale, PosixLocalizer};

let format = Format::localized([Component::weekday()]);
let locale = Locale::new("sk_SK")?;
// `PosixLocalizer` has no locale data, so every lookup fails.
assert_eq!(format.resolve(&locale, &PosixLocalizer), "eeee");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use crate::{
    component::Component,
    error::Error,
    format::Format,
    formatter::Formatter,
    locale::{Locale, Localizer, PosixLocalizer},
};

#[macro_use]
mod logging;

pub mod component;
mod error;
mod format;
mod formatter;
mod locale;
