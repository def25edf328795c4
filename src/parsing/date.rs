//! Loose date parsing.
//!
//! Raw rosters carry dates in whatever shape the exporting system produced:
//! `21-12-2013`, `2013/12/21`, `21 Dec 2013`, `December 21, 2013`. This
//! module extracts a three-token date structure from the raw string and
//! parses it against a fixed, ordered list of patterns.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DateFormatError;

/// The ordered date patterns accepted by [`parse_date`].
///
/// Day/month/year permutations come first, then month/day/year, then
/// year-first, each in numeric, abbreviated-month, and full-month-name
/// variants. The order is part of the contract: an ambiguous string such as
/// `05-03-2020` always resolves to the first matching pattern (day-first,
/// 5 March 2020).
pub const DATE_PATTERNS: [&str; 9] = [
    "%d-%m-%Y",
    "%d-%b-%Y",
    "%d-%B-%Y",
    "%m-%d-%Y",
    "%b-%d-%Y",
    "%B-%d-%Y",
    "%Y-%m-%d",
    "%Y-%b-%d",
    "%Y-%B-%d",
];

/// Separator runs between date tokens may be at most this many characters.
const MAX_SEPARATOR_LEN: usize = 3;

/// Matches one alphanumeric token of a date string.
static DATE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9]+").expect("date token pattern is valid")
});

/// Extracts the first three alphanumeric tokens and joins them with `-`.
///
/// Fails if the string holds fewer than three tokens, or if the separators
/// between the first three tokens run longer than [`MAX_SEPARATOR_LEN`]
/// characters.
fn normalize(raw: &str) -> Result<String, DateFormatError> {
    let tokens: Vec<regex::Match<'_>> = DATE_TOKEN.find_iter(raw).take(3).collect();

    let [first, second, third] = tokens.as_slice() else {
        return Err(DateFormatError::Structure {
            raw: raw.to_string(),
        });
    };

    if second.start() - first.end() > MAX_SEPARATOR_LEN
        || third.start() - second.end() > MAX_SEPARATOR_LEN
    {
        return Err(DateFormatError::Structure {
            raw: raw.to_string(),
        });
    }

    Ok(format!(
        "{}-{}-{}",
        first.as_str(),
        second.as_str(),
        third.as_str()
    ))
}

/// Parses a loosely-formatted date string into a calendar date.
///
/// The string is first reduced to a normalized `token-token-token`
/// candidate, which is then tried against [`DATE_PATTERNS`] in order. The
/// first pattern that parses wins; if none does, the error carries the last
/// pattern's failure.
///
/// # Errors
///
/// Returns [`DateFormatError::Structure`] when no three-token structure can
/// be extracted, and [`DateFormatError::Unparsed`] when no pattern accepts
/// the candidate.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use overlap_engine::parsing::parse_date;
///
/// let date = parse_date("21 Dec 2013").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2013, 12, 21).unwrap());
///
/// // Ambiguous day/month resolves day-first.
/// let date = parse_date("05-03-2020").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2020, 3, 5).unwrap());
/// ```
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateFormatError> {
    let candidate = normalize(raw)?;

    let mut last_error = None;
    for pattern in DATE_PATTERNS {
        match NaiveDate::parse_from_str(&candidate, pattern) {
            Ok(date) => return Ok(date),
            Err(error) => last_error = Some(error),
        }
    }

    Err(DateFormatError::Unparsed {
        message: last_error
            .map(|error| error.to_string())
            .unwrap_or_else(|| "no pattern attempted".to_string()),
        candidate,
    })
}
