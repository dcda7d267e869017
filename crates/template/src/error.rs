use thiserror::Error;

/// Error raised when a template is malformed.
///
/// Every variant carries the full offending template text, so the failure
/// can be reported without the caller keeping the original format string
/// around. Rendering is all-or-nothing: no partial output is produced.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FormatError {
    /// The template contains a tag that is not one of the recognised three.
    #[error("invalid log format '{template}': unrecognised tag {tag}")]
    UnknownTag {
        /// Full text of the malformed template.
        template: String,
        /// The tag as it appeared in the template, angle brackets included.
        tag: String,
    },
    /// A `<` appeared while a tag was still being captured.
    #[error("invalid log format '{template}': '<' opened inside a tag")]
    NestedTag {
        /// Full text of the malformed template.
        template: String,
    },
    /// The template ended before a tag was closed.
    #[error("invalid log format '{template}': unterminated tag")]
    UnterminatedTag {
        /// Full text of the malformed template.
        template: String,
    },
}

impl FormatError {
    /// Full text of the template that failed to render.
    #[must_use]
    pub fn template(&self) -> &str {
        match self {
            Self::UnknownTag { template, .. }
            | Self::NestedTag { template }
            | Self::UnterminatedTag { template } => template,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_accessor_covers_every_variant() {
        let errors = [
            FormatError::UnknownTag {
                template: "<a/>".to_owned(),
                tag: "<a/>".to_owned(),
            },
            FormatError::NestedTag {
                template: "<a/>".to_owned(),
            },
            FormatError::UnterminatedTag {
                template: "<a/>".to_owned(),
            },
        ];
        for error in errors {
            assert_eq!(error.template(), "<a/>");
        }
    }
}
