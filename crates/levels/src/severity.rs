use std::fmt;
use std::str::FromStr;

/// Severity of a log message, ordered from most to least verbose.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Finest-grained diagnostic output.
    Trace,
    /// Diagnostic output aimed at developers.
    Debug,
    /// Routine informational output.
    Info,
    /// Something unexpected that does not stop the caller.
    Warn,
    /// A failure the caller should act on.
    Error,
}

impl Severity {
    /// Every severity, ordered from most to least verbose.
    pub const ALL: [Self; 5] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
    ];

    /// Returns the canonical display name rendered into log lines.
    ///
    /// The capitalisation is part of the output contract: first letter
    /// upper, rest lower. Template rendering and the [`fmt::Display`] impl
    /// both go through this method so the wording cannot drift.
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::Severity;
    ///
    /// assert_eq!(Severity::Trace.as_str(), "Trace");
    /// assert_eq!(Severity::Warn.as_str(), "Warn");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warn => "Warn",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    _private: (),
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log severity")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a severity name case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::Severity;
    ///
    /// assert_eq!("Warn".parse(), Ok(Severity::Warn));
    /// assert_eq!("TRACE".parse(), Ok(Severity::Trace));
    /// assert!("verbose".parse::<Severity>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseSeverityError { _private: () }),
        }
    }
}
