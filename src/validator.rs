/// Shortest password length we will generate.
pub const MIN_LENGTH: usize = 12;
/// Longest password length we will generate.
pub const MAX_LENGTH: usize = 4096;
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 10_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password length must be a whole number of at least {min} (got '{input}')", min = MIN_LENGTH)]
    InvalidLength { input: String },

    #[error("Password count must be a whole number of at least {min} (got '{input}')", min = MIN_COUNT)]
    InvalidCount { input: String },

    #[error("Password length must be at most {max} (got '{input}')", max = MAX_LENGTH)]
    LengthTooLarge { input: String },

    #[error("Password count must be at most {max} (got '{input}')", max = MAX_COUNT)]
    CountTooLarge { input: String },
}

/// A request that already passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    count: usize,
}

impl GenerationRequest {
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

enum Rejection {
    Invalid,
    TooLarge,
}

fn parse_in_range(input: &str, min: usize, max: usize) -> Result<usize, Rejection> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Rejection::Invalid);
    }

    // All digits here, so a parse failure can only be overflow.
    match digits.parse::<usize>() {
        Ok(n) if n < min => Err(Rejection::Invalid),
        Ok(n) if n <= max => Ok(n),
        _ => Err(Rejection::TooLarge),
    }
}

/// Length is checked first; only the first failure is reported.
pub fn validate(length_input: &str, count_input: &str) -> Result<GenerationRequest, ValidationError> {
    let length = parse_length(length_input)?;
    let count = parse_count(count_input)?;

    Ok(GenerationRequest { length, count })
}

pub fn parse_length(input: &str) -> Result<usize, ValidationError> {
    let input_owned = || input.to_string();
    parse_in_range(input, MIN_LENGTH, MAX_LENGTH).map_err(|rejection| match rejection {
        Rejection::Invalid => ValidationError::InvalidLength { input: input_owned() },
        Rejection::TooLarge => ValidationError::LengthTooLarge { input: input_owned() },
    })
}

pub fn parse_count(input: &str) -> Result<usize, ValidationError> {
    let input_owned = || input.to_string();
    parse_in_range(input, MIN_COUNT, MAX_COUNT).map_err(|rejection| match rejection {
        Rejection::Invalid => ValidationError::InvalidCount { input: input_owned() },
        Rejection::TooLarge => ValidationError::CountTooLarge { input: input_owned() },
    })
}
