use std::fmt;

/// Raised when a codec is built from an unusable alphabet.
///
/// This is the only failure the codec knows about. Once a [`Codec`](crate::Codec)
/// exists, encoding and decoding cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The alphabet is empty or consists only of whitespace
    EmptyAlphabet,
    /// Fewer than 16 characters
    AlphabetTooShort { length: usize },
    /// More than 128 characters
    AlphabetTooLong { length: usize },
    /// Length is within range but is not 2^k
    NotPowerOfTwo { length: usize },
}

impl ConfigError {
    fn hint(&self) -> &'static str {
        match self {
            ConfigError::EmptyAlphabet => "provide the characters of the alphabet in symbol order",
            ConfigError::AlphabetTooShort { .. } | ConfigError::AlphabetTooLong { .. } => {
                "supported alphabet sizes are 16, 32, 64 and 128 characters"
            }
            ConfigError::NotPowerOfTwo { .. } => {
                "each character must carry a whole number of bits (16, 32, 64 or 128 characters)"
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        let message = match self {
            ConfigError::EmptyAlphabet => "alphabet cannot be empty".to_string(),
            ConfigError::AlphabetTooShort { length } => {
                format!("alphabet must have at least 16 characters, got {}", length)
            }
            ConfigError::AlphabetTooLong { length } => {
                format!("alphabet cannot exceed 128 characters, got {}", length)
            }
            ConfigError::NotPowerOfTwo { length } => {
                format!("alphabet length must be a power of 2, got {}", length)
            }
        };

        if use_color {
            writeln!(f, "\x1b[1;31merror:\x1b[0m invalid configuration: {}", message)?;
            write!(f, "\n\x1b[1;36mhint:\x1b[0m {}", self.hint())
        } else {
            writeln!(f, "error: invalid configuration: {}", message)?;
            write!(f, "\nhint: {}", self.hint())
        }
    }
}

impl std::error::Error for ConfigError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a named alphabet is not in the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m alphabet '{}' not found",
                self.name
            )?;
        } else {
            writeln!(f, "error: alphabet '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1mbasen list\x1b[0m to see all alphabets"
            )
        } else {
            write!(f, "      run `basen list` to see all alphabets")
        }
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|(da, a), (db, b)| da.cmp(db).then_with(|| a.cmp(b)))
        .map(|(_, candidate)| candidate.clone())
}
