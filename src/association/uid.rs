//! Canonical syntax identifier type.
//!
//! Abstract and transfer syntaxes are named by unique identifiers (UIDs),
//! which may arrive as text or as raw bytes,
//! possibly padded with trailing null characters.
//! [`SyntaxUid`] normalizes all of these forms on input,
//! so that downstream logic never has to branch on representation.
use std::borrow::Cow;
use std::convert::TryFrom;
use std::str::FromStr;

use snafu::{ensure, Backtrace, Snafu};

/// Could not interpret a value as a syntax UID.
#[derive(Debug, Snafu)]
#[snafu(display("invalid syntax UID `{}`", uid))]
pub struct InvalidUid {
    uid: String,
    backtrace: Backtrace,
}

/// A normalized unique identifier for an abstract or transfer syntax.
///
/// The inner text is guaranteed to be a well formed dotted-numeric UID,
/// with any trailing padding already removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SyntaxUid(String);

impl SyntaxUid {
    /// Create a syntax UID from its raw byte or text form.
    pub fn new(uid: impl AsRef<[u8]>) -> Result<Self, InvalidUid> {
        let uid = uid.as_ref();
        match std::str::from_utf8(uid) {
            Ok(text) => text.parse(),
            Err(_) => InvalidUidSnafu {
                uid: String::from_utf8_lossy(uid).into_owned(),
            }
            .fail(),
        }
    }

    /// Obtain the UID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SyntaxUid {
    type Err = InvalidUid;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uid = trim_uid(Cow::from(s));
        ensure!(
            is_valid_uid(&uid),
            InvalidUidSnafu {
                uid: uid.to_string()
            }
        );
        Ok(SyntaxUid(uid.into_owned()))
    }
}

impl TryFrom<&[u8]> for SyntaxUid {
    type Error = InvalidUid;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        SyntaxUid::new(value)
    }
}

impl AsRef<str> for SyntaxUid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SyntaxUid> for String {
    fn from(uid: SyntaxUid) -> Self {
        uid.0
    }
}

impl PartialEq<str> for SyntaxUid {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SyntaxUid {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for SyntaxUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn trim_uid(uid: Cow<'_, str>) -> Cow<'_, str> {
    if uid.ends_with(['\0', ' ']) {
        Cow::Owned(uid.trim_end_matches(|c| c == '\0' || c == ' ').to_string())
    } else {
        uid
    }
}

fn is_valid_uid(uid: &str) -> bool {
    !uid.is_empty()
        && uid.len() <= 64
        && uid
            .split('.')
            .all(|component| !component.is_empty() && component.bytes().all(|b| b.is_ascii_digit()))
}
