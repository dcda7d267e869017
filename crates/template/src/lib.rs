#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `template` renders log lines from a format string carrying self-closing,
//! case-insensitive substitution tags interleaved with literal text. Three
//! tags are recognised: [`LOGNAME_TAG`], [`LEVEL_TAG`], and [`MESSAGE_TAG`].
//! Everything else between a `<` and the following `>` is a hard error, as
//! is a `<` that never closes; templates are expected to be validated once
//! at startup, so a misconfigured format fails fast rather than producing
//! partial output.
//!
//! # Design
//!
//! [`Template::render`] is a single left-to-right scan with two modes.
//! Literal mode copies characters to the output until a `<` switches to tag
//! capture; tag capture accumulates characters (angle brackets included)
//! until the closing `>`, lower-cases the buffer, and substitutes the
//! matching value. The renderer is a pure function of the template and its
//! three inputs; there is no escaping mechanism for a literal `<`.
//!
//! # Errors
//!
//! All failure paths surface as [`FormatError`], each variant carrying the
//! full offending template text.
//!
//! # Examples
//!
//! ```
//! use levels::Severity;
//! use template::Template;
//!
//! let template = Template::default();
//! let line = template.render("models.active", Severity::Warn, "cache is cold")?;
//! assert_eq!(line, "models.active Warn: cache is cold");
//! # Ok::<(), template::FormatError>(())
//! ```

mod error;

pub use error::FormatError;

use std::fmt;

use levels::Severity;

/// Format used when no explicit template is configured.
pub const DEFAULT_FORMAT: &str = "<logName/> <level/>: <message/>";

/// Tag replaced with the logger name.
pub const LOGNAME_TAG: &str = "<logname/>";

/// Tag replaced with the severity display name.
pub const LEVEL_TAG: &str = "<level/>";

/// Tag replaced with the message text.
pub const MESSAGE_TAG: &str = "<message/>";

/// An immutable log-line format string.
///
/// Tags are matched case-insensitively, so `<logName/>` and `<LOGNAME/>`
/// both substitute the logger name. The default template renders
/// `{logname} {Level}: {message}`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Template {
    format: String,
}

impl Template {
    /// Creates a template from the supplied format string.
    ///
    /// The format is not checked here; [`validate`](Self::validate) or the
    /// first [`render`](Self::render) reports malformed input.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Returns the underlying format string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.format
    }

    /// Renders one log line by substituting the recognised tags.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when the template carries an unrecognised
    /// tag, opens a tag inside another, or ends mid-tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::Severity;
    /// use template::Template;
    ///
    /// let template = Template::new("[<level/>] <message/>");
    /// let line = template.render("ROOT", Severity::Info, "ready")?;
    /// assert_eq!(line, "[Info] ready");
    /// # Ok::<(), template::FormatError>(())
    /// ```
    pub fn render(
        &self,
        logger_name: &str,
        level: Severity,
        message: &str,
    ) -> Result<String, FormatError> {
        let mut out =
            String::with_capacity(self.format.len() + logger_name.len() + message.len());
        let mut tag = String::new();
        let mut in_tag = false;

        for c in self.format.chars() {
            if in_tag {
                if c == '<' {
                    return Err(FormatError::NestedTag {
                        template: self.format.clone(),
                    });
                }
                tag.push(c);
                if c == '>' {
                    match tag.to_ascii_lowercase().as_str() {
                        LOGNAME_TAG => out.push_str(logger_name),
                        LEVEL_TAG => out.push_str(level.as_str()),
                        MESSAGE_TAG => out.push_str(message),
                        _ => {
                            return Err(FormatError::UnknownTag {
                                template: self.format.clone(),
                                tag,
                            });
                        }
                    }
                    tag.clear();
                    in_tag = false;
                }
            } else if c == '<' {
                in_tag = true;
                tag.push(c);
            } else {
                out.push(c);
            }
        }

        if in_tag {
            return Err(FormatError::UnterminatedTag {
                template: self.format.clone(),
            });
        }
        Ok(out)
    }

    /// Checks the template without producing output.
    ///
    /// Renders against placeholder inputs and discards the result, so a
    /// malformed format is reported before the first real log call.
    pub fn validate(&self) -> Result<(), FormatError> {
        self.render("", Severity::Info, "").map(|_| ())
    }
}

impl Default for Template {
    /// The [`DEFAULT_FORMAT`] template.
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format)
    }
}

impl From<&str> for Template {
    fn from(format: &str) -> Self {
        Self::new(format)
    }
}

impl From<String> for Template {
    fn from(format: String) -> Self {
        Self::new(format)
    }
}
