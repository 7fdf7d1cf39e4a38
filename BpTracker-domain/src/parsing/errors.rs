use thiserror::Error;

/// Example phrase offered back to the user when nothing could be found
pub const EXAMPLE_PHRASE: &str = "120 over 80 pulse 72";

/// Reasons a piece of text could not be turned into a reading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// Blank or whitespace-only text
    #[error("No input provided")]
    EmptyInput,

    /// No systolic or no diastolic value could be located
    #[error("Could not find BP values. Try saying: '{}'", EXAMPLE_PHRASE)]
    MissingValues,

    /// Values were found but are physiologically implausible
    #[error("BP values seem out of range. Please check: systolic={systolic}, diastolic={diastolic}")]
    OutOfRange { systolic: u16, diastolic: u16 },

    /// Any other failure while extracting values
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl ParseFailure {
    /// Stable tag for the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            ParseFailure::EmptyInput => "EmptyInput",
            ParseFailure::MissingValues => "MissingValues",
            ParseFailure::OutOfRange { .. } => "OutOfRange",
            ParseFailure::ParseError(_) => "ParseError",
        }
    }
}

impl From<std::num::ParseIntError> for ParseFailure {
    fn from(error: std::num::ParseIntError) -> Self {
        ParseFailure::ParseError(error.to_string())
    }
}
