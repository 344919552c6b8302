//! Application entity title validation.
//!
//! An AE title names a DICOM node in an association.
//! It must be a non-empty string of at most 16 characters
//! from the default character repertoire,
//! excluding backslash and all control characters.
//! Leading and trailing spaces are not significant.
use snafu::{ensure, Backtrace, Snafu};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// AE title must be a non-empty string
    Empty { backtrace: Backtrace },

    #[snafu(display(
        "AE title must not contain backslash or control characters (found {:?})",
        character
    ))]
    ForbiddenCharacter {
        character: char,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate the given application entity title,
/// returning it in its significant form.
///
/// Leading and trailing spaces are removed.
/// If more than 16 characters remain,
/// the title is truncated to the first 16.
/// An empty or all-space title
/// and a title containing a backslash or control characters
/// are invalid.
pub fn validate_ae_title(ae_title: &str) -> Result<String> {
    let significant = ae_title.trim();
    ensure!(!significant.is_empty(), EmptySnafu);

    if let Some(character) = significant
        .chars()
        .find(|c| c.is_control() || *c == '\\')
    {
        return ForbiddenCharacterSnafu { character }.fail();
    }

    Ok(significant.chars().take(16).collect())
}

#[cfg(test)]
mod tests {
    use matches::assert_matches;

    use super::{validate_ae_title, Error};

    #[test]
    fn valid_titles_pass_through() {
        assert_eq!(validate_ae_title("MAIN-STORAGE").unwrap(), "MAIN-STORAGE");
        // surrounding spaces are not significant
        assert_eq!(validate_ae_title("  PACS-QR  ").unwrap(), "PACS-QR");
        // inner spaces are fine
        assert_eq!(validate_ae_title("CT SCANNER 1").unwrap(), "CT SCANNER 1");
    }

    #[test]
    fn long_titles_are_truncated() {
        assert_eq!(
            validate_ae_title("SOME-VERY-LONG-AE-TITLE").unwrap(),
            "SOME-VERY-LONG-A"
        );
        // exactly 16 significant characters is fine
        assert_eq!(
            validate_ae_title(" SIXTEEN-CHARCTRS ").unwrap(),
            "SIXTEEN-CHARCTRS"
        );
    }

    #[test]
    fn empty_titles_are_rejected() {
        assert_matches!(validate_ae_title(""), Err(Error::Empty { .. }));
        assert_matches!(validate_ae_title("     "), Err(Error::Empty { .. }));
    }

    #[test]
    fn forbidden_characters_are_rejected() {
        assert_matches!(
            validate_ae_title("BAD\\TITLE"),
            Err(Error::ForbiddenCharacter { character: '\\', .. })
        );
        assert_matches!(
            validate_ae_title("BAD\u{7}TITLE"),
            Err(Error::ForbiddenCharacter { character: '\u{7}', .. })
        );
        assert_matches!(
            validate_ae_title("BAD\nTITLE"),
            Err(Error::ForbiddenCharacter { .. })
        );
    }
}
