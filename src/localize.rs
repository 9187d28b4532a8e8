use std::borrow::Cow;

use errors::Error;

/// Translation seam for user-facing messages. Threaded explicitly
/// through the display path; no global catalog.
pub trait Translate {
    fn translate<'a>(&self, message: &'a str) -> Cow<'a, str>;
}

/// Pass-through translator used when no catalog is installed.
#[derive(Debug, Default)]
pub struct Identity;

impl Translate for Identity {
    fn translate<'a>(&self, message: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(message)
    }
}

/// Render `err` for the user. The message template is translated
/// before the offending input values are appended, so catalogs only
/// ever see fixed strings.
pub fn describe<T: Translate>(err: &Error, tr: &T) -> String {
    match *err {
        Error::DuplicateCode(ref s) => format!(
            "{}: {}",
            tr.translate("The date structure parameter contains a duplicate entry"),
            s
        ),
        Error::UnknownCode(ref s) => {
            format!("{}: {}", tr.translate("Invalid date structure parameter(s)"), s)
        }
        Error::MixedClass(ref s) => format!(
            "{}: {}",
            tr.translate("Long time periods cannot be mixed with short time periods"),
            s
        ),
        Error::MissingAnchor(ref s) => {
            format!("{}: {}", tr.translate("The first date value is missing"), s)
        }
        ref other => other.to_string(),
    }
}
