use super::{Diagnostics, Scope};
use itertools::Itertools;

#[must_use]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{message}")]
    Invalid { message: String },
    #[error("{value:?} is not a valid {table} (expected one of {})", .expected.iter().map(|e| format!("{e:?}")).join(", "))]
    UnknownValue {
        table: &'static str,
        value: String,
        expected: Vec<&'static str>,
    },
    #[error("{} are not valid {table} values (expected one of {})", .values.iter().map(|v| format!("{v:?}")).join(", "), .expected.iter().map(|e| format!("{e:?}")).join(", "))]
    UnknownSetValues {
        table: &'static str,
        values: Vec<String>,
        expected: Vec<&'static str>,
    },
    #[error("{value:?} is not a valid {what} (it must match {pattern})")]
    Pattern {
        what: &'static str,
        value: String,
        pattern: &'static str,
    },
    #[error("schedule end time {end} precedes its start time {start}")]
    ScheduleEndBeforeStart { start: String, end: String },
    #[error("exactly one of {} must be set", .fields.join(", "))]
    ExactlyOneOf { fields: &'static [&'static str] },
    #[error("group_by cannot be set for {variant} alerts, which are grouped by the service")]
    GroupByNotAllowed { variant: &'static str },
    #[error("type_definition must set one alert type, but none is set")]
    NoVariantSelected,
    #[error("type_definition must set exactly one alert type, but {} are set", .variants.join(", "))]
    MultipleVariantsSelected { variants: Vec<&'static str> },
    #[error("latency threshold {value} must be a non-negative, whole number of milliseconds")]
    InvalidLatency { value: f64 },
    #[error("{field} {value} is outside of the allowed range {min} to {max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("integration id {value:?} must be an unsigned 32-bit integer, without a sign or leading zeros")]
    InvalidIntegrationId { value: String },
    #[error("{field} is deprecated: {instead}")]
    Deprecated {
        field: &'static str,
        instead: &'static str,
    },

    #[error("alerts service returned {table} code {code}, which this client does not recognize")]
    UnknownCode { table: &'static str, code: i32 },
    #[error("alerts service returned a type definition which this client does not recognize")]
    UnrecognizedVariant,
    #[error("alerts service declared type {declared}, but populated type definition {populated}")]
    TypeMismatch { declared: String, populated: String },
    #[error("alerts service response is missing required field {field}")]
    MissingField { field: &'static str },
    #[error("alerts service returned invalid time of day {hours}:{minutes}")]
    InvalidTimeOfDay { hours: i32, minutes: i32 },
}

impl Error {
    /// Push this Error as an error-severity diagnostic at `scope`.
    pub fn push(self, scope: Scope, diagnostics: &mut Diagnostics) {
        diagnostics.push_error(scope, self);
    }

    /// Push this Error as a warning-severity diagnostic at `scope`.
    pub fn push_warning(self, scope: Scope, diagnostics: &mut Diagnostics) {
        diagnostics.push_warning(scope, self);
    }

    /// Conversion errors indicate skew between this client and the alerts service,
    /// rather than a problem with the user's configuration.
    pub fn is_conversion(&self) -> bool {
        matches!(
            self,
            Error::UnknownCode { .. }
                | Error::UnrecognizedVariant
                | Error::TypeMismatch { .. }
                | Error::MissingField { .. }
                | Error::InvalidTimeOfDay { .. }
        )
    }
}
