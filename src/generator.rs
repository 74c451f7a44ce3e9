use std::fmt;

use rand::Rng;

use crate::validator::GenerationRequest;

/// Upper, lower, digits, then the eight symbols. 70 characters in total.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// A generated password. Never printed through `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}

pub type PasswordBatch = Vec<Password>;

pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Password {
    let password = (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();

    Password(password)
}

/// Draws `count` passwords independently. Duplicates are not filtered.
pub fn generate_batch_with<R: Rng + ?Sized>(
    rng: &mut R,
    request: &GenerationRequest,
) -> PasswordBatch {
    (0..request.count())
        .map(|_| generate_password_with(rng, request.length()))
        .collect()
}

pub fn generate_batch(request: &GenerationRequest) -> PasswordBatch {
    let batch = generate_batch_with(&mut rand::thread_rng(), request);
    tracing::debug!(
        length = request.length(),
        count = batch.len(),
        "generated password batch"
    );
    batch
}
