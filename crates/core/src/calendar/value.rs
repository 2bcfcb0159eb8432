use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

const ISO_DATE: &str = "%Y-%m-%d";
const ISO_LOCAL: &str = "%Y-%m-%dT%H:%M:%S";
const ISO_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// A date or date-time value as resolved by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemporalValue {
    /// `VALUE=DATE`, e.g. `20240115`.
    Date(NaiveDate),
    /// A date-time without zone information.
    Floating(NaiveDateTime),
    /// A date-time with the `Z` suffix.
    Utc(DateTime<Utc>),
    /// A local date-time qualified by a `TZID` parameter.
    Zoned { local: NaiveDateTime, tzid: String },
}

impl TemporalValue {
    /// Parses an iCalendar `DATE` or `DATE-TIME` value.
    ///
    /// Returns `None` when the text is neither, so callers can keep the raw
    /// value as text instead.
    pub fn parse(raw: &str, tzid: Option<&str>) -> Option<Self> {
        let raw = raw.trim();

        if raw.len() == 8 {
            return NaiveDate::parse_from_str(raw, "%Y%m%d")
                .ok()
                .map(Self::Date);
        }

        if let Some(utc) = raw.strip_suffix('Z') {
            return NaiveDateTime::parse_from_str(utc, "%Y%m%dT%H%M%S")
                .ok()
                .map(|naive| Self::Utc(Utc.from_utc_datetime(&naive)));
        }

        let local = NaiveDateTime::parse_from_str(raw, "%Y%m%dT%H%M%S").ok()?;
        Some(match tzid {
            Some(tzid) if !tzid.is_empty() => Self::Zoned {
                local,
                tzid: tzid.to_string(),
            },
            _ => Self::Floating(local),
        })
    }

    /// Canonical ISO-8601 text for this value.
    ///
    /// Zoned values are resolved through the IANA database; an unknown or
    /// ambiguous zone falls back to the floating form.
    pub fn to_iso8601(&self) -> String {
        match self {
            Self::Date(date) => date.format(ISO_DATE).to_string(),
            Self::Floating(local) => local.format(ISO_LOCAL).to_string(),
            Self::Utc(instant) => instant.format(ISO_OFFSET).to_string(),
            Self::Zoned { local, tzid } => tzid
                .trim_start_matches('/')
                .parse::<Tz>()
                .ok()
                .and_then(|tz| tz.from_local_datetime(local).earliest())
                .map(|zoned| zoned.format(ISO_OFFSET).to_string())
                .unwrap_or_else(|| local.format(ISO_LOCAL).to_string()),
        }
    }
}

/// A textual property value in its raw encoded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextValue {
    pub raw: String,
}

impl TextValue {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The raw text with only escaped commas (`\,`) restored.
    ///
    /// Every other escape sequence is left as it was in the source.
    pub fn unescape_commas(&self) -> String {
        self.raw.replace("\\,", ",")
    }

    /// The raw text with every TEXT escape sequence resolved.
    pub fn decoded(&self) -> String {
        let mut out = String::with_capacity(self.raw.len());
        let mut chars = self.raw.chars();

        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('n') | Some('N') => out.push('\n'),
                Some(escaped @ (',' | ';' | '\\')) => out.push(escaped),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        }

        out
    }
}
