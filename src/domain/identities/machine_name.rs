use crate::domain::AppError;

/// Maximum length of a component machine name.
pub const MACHINE_NAME_MAX_LENGTH: usize = 64;

/// A validated component machine name.
///
/// Guarantees:
/// - Non-empty, at most 64 characters
/// - Contains only lowercase ASCII letters, digits, or `_`
///
/// The format also rules out path separators and `.`/`..`, so a machine name
/// is always safe to use as a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MachineName(String);

impl MachineName {
    /// Validate and create a new `MachineName`.
    pub fn new(id: &str) -> Result<Self, AppError> {
        if Self::is_valid(id) {
            Ok(Self(id.to_string()))
        } else {
            Err(AppError::InvalidMachineName(id.to_string()))
        }
    }

    pub fn is_valid(id: &str) -> bool {
        !id.is_empty()
            && id.len() <= MACHINE_NAME_MAX_LENGTH
            && id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    }

    /// Suggest a machine name for a human-readable label.
    ///
    /// Lowercases the label, replaces every run of characters outside
    /// `[a-z0-9_]` with a single `_`, and truncates to 64 characters.
    /// The result may be empty (e.g. for an empty label) and is not
    /// validated here.
    pub fn suggest(label: &str) -> String {
        let mut out = String::with_capacity(label.len());
        let mut in_run = false;
        for c in label.chars().flat_map(char::to_lowercase) {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                out.push(c);
                in_run = false;
            } else if !in_run {
                out.push('_');
                in_run = true;
            }
        }
        out.truncate(MACHINE_NAME_MAX_LENGTH);
        out
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MachineName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for MachineName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
