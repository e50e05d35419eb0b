use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnsortedValues,
    NanValue,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsortedValues => write!(f, "values must be sorted in ascending order"),
            Error::NanValue => write!(f, "values must not contain NaN"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
