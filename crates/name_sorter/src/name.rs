use ::std::fmt::{self, Display};
use ::std::str::FromStr;

use crate::error::NameError;

/// A person's name split into a surname and the given names before it.
///
/// Both parts are whitespace-free tokens, so rendering with [`Display`]
/// is the exact inverse of [`Name::parse`] on single-spaced input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    surname: String,
    given_names: Vec<String>,
}

impl Name {
    pub fn new(
        surname: impl Into<String>,
        given_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, NameError> {
        let surname = surname.into();
        if surname.is_empty() {
            return Err(NameError::EmptySurname);
        }
        validate_token(&surname)?;

        let given_names: Vec<String> =
            given_names.into_iter().map(Into::into).collect();
        if given_names.is_empty() {
            return Err(NameError::MissingGivenName(surname));
        }
        for token in &given_names {
            validate_token(token)?;
        }

        Ok(Self { surname, given_names })
    }

    /// Parses a line such as `"Adonis Julius Archer"`.
    ///
    /// Runs of whitespace are treated as one separator and surrounding
    /// whitespace is ignored. The last token is the surname.
    pub fn parse(line: &str) -> Result<Self, NameError> {
        let mut tokens: Vec<&str> = line.split_whitespace().collect();

        let Some(surname) = tokens.pop() else {
            return Err(NameError::Empty);
        };
        if tokens.is_empty() {
            return Err(NameError::MissingGivenName(surname.to_string()));
        }

        Self::new(surname, tokens)
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn given_names(&self) -> &[String] {
        &self.given_names
    }

    /// Given names joined by single spaces, the secondary sort key.
    pub fn joined_given_names(&self) -> String {
        self.given_names.join(" ")
    }
}

fn validate_token(token: &str) -> Result<(), NameError> {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(NameError::InvalidToken(token.to_string()));
    }
    Ok(())
}

impl FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.joined_given_names(), self.surname)
    }
}
