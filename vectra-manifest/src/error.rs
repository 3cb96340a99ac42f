use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a dimension-out-of-range error.
    pub fn dimension_error(&self, value: usize, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::DimensionOutOfRange {
            src: self.named_source(),
            span,
            value,
        })
    }

    /// Create an axes-too-short error.
    pub fn axes_too_short_error(
        &self,
        needed: usize,
        got: usize,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::AxesTooShort {
            src: self.named_source(),
            span,
            needed,
            got,
        })
    }

    /// Create a duplicate-axis error.
    pub fn duplicate_axis_error(&self, axis: char, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::DuplicateAxis {
            src: self.named_source(),
            span,
            axis,
        })
    }

    /// Create an invalid token error.
    pub fn invalid_token_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidToken {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'vectra init' to create a new vectra.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vectra.toml")]
    #[diagnostic(code(vectra::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("max_dimension must be at least 2, got {value}")]
    #[diagnostic(
        code(vectra::dimension_out_of_range),
        help("the smallest generated type is a 2-dimensional vector")
    )]
    DimensionOutOfRange {
        #[source_code]
        src: NamedSource<String>,
        #[label("configured here")]
        span: Option<SourceSpan>,
        value: usize,
    },

    #[error("axis alphabet has {got} labels but max_dimension is {needed}")]
    #[diagnostic(
        code(vectra::axes_too_short),
        help("naming.axes must provide one distinct label per axis of the widest type")
    )]
    AxesTooShort {
        #[source_code]
        src: NamedSource<String>,
        #[label("alphabet configured here")]
        span: Option<SourceSpan>,
        needed: usize,
        got: usize,
    },

    #[error("duplicate axis label '{axis}'")]
    #[diagnostic(
        code(vectra::duplicate_axis),
        help("axis labels become field names; each one must be unique")
    )]
    DuplicateAxis {
        #[source_code]
        src: NamedSource<String>,
        #[label("alphabet configured here")]
        span: Option<SourceSpan>,
        axis: char,
    },

    #[error("invalid {context} '{name}'")]
    #[diagnostic(code(vectra::invalid_token), help("{reason}"))]
    InvalidToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("configured here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}
