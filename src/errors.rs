use std::convert::From;

#[derive(Fail, Debug)]
pub enum Error {
    #[fail(display = "duplicate entry in date structure: {}", _0)]
    DuplicateCode(String),

    #[fail(display = "invalid date structure parameter(s): {}", _0)]
    UnknownCode(String),

    #[fail(display = "long and short time periods mixed: {}", _0)]
    MixedClass(String),

    #[fail(display = "first date value is missing: {}", _0)]
    MissingAnchor(String),

    #[fail(display = "dataset err: {}", _0)]
    Dataset(String),

    #[fail(display = "io error: {}", _0)]
    Io(#[cause] ::std::io::Error),

    #[fail(display = "json err: {}", _0)]
    Json(#[cause] ::serde_json::Error),

    #[fail(display = "bad date format: {}", _0)]
    DateParse(#[cause] ::chrono::ParseError),

    #[fail(display = "help file not found: {}", _0)]
    HelpFile(String),

    #[fail(display = "bad integer for {}: {}", _0, _1)]
    BadInt(&'static str, #[cause] ::std::num::ParseIntError),
}

impl From<::std::io::Error> for Error {
    fn from(kind: ::std::io::Error) -> Error {
        Error::Io(kind)
    }
}

impl From<::serde_json::Error> for Error {
    fn from(kind: ::serde_json::Error) -> Error {
        Error::Json(kind)
    }
}

impl From<::chrono::ParseError> for Error {
    fn from(kind: ::chrono::ParseError) -> Error {
        Error::DateParse(kind)
    }
}
