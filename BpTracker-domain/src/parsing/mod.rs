// Free text → reading pipeline: normalize, extract, validate
pub mod errors;
pub mod extractor;
pub mod normalizer;
pub mod parser;
pub mod validator;

pub use errors::ParseFailure;
pub use normalizer::normalize;
pub use parser::{parse, VoiceParser};
pub use validator::{validate, ValidatedValues};
