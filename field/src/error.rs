use thiserror::Error;

///
/// Errors that can occur while setting up or querying a curve field
///
/// Points where a curve is undefined are not errors: those are reported as `None` by the lookup
/// functions. These errors indicate a field that has been configured in a way that can't be drawn.
///
#[derive(Clone, PartialEq, Debug, Error)]
pub enum FieldError {
    /// Both ends of a range are the same value, so there is nothing to map between
    #[error("degenerate range: minimum and maximum are both {value}")]
    DegenerateRange { value: f64 },

    /// A range has its minimum above its maximum
    #[error("inverted range: minimum {min} is greater than maximum {max}")]
    InvertedRange { min: f64, max: f64 },

    /// One of the ends of a range is NaN or infinite
    #[error("range {min}..{max} is not finite")]
    NonFiniteRange { min: f64, max: f64 },

    /// The margins of the view box leave no space to draw in
    #[error("view box {width}x{height} has no drawable area inside its margins")]
    EmptyViewBox { width: f64, height: f64 },

    /// The height lookup settings can't be used to walk a path
    #[error("lookup step {step} and maximum error {max_error} must both be positive")]
    InvalidLookup { step: f64, max_error: f64 },

    /// A curve was requested that the field does not contain
    #[error("no curve with id '{0}'")]
    UnknownCurve(String),
}
