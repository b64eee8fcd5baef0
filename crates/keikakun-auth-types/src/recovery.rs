//! One-time MFA recovery codes.
//!
//! Plaintext codes are shown to the staff member once; only SHA-256 hashes of
//! the normalized form are stored.

use rand::RngExt;
use sha2::{Digest, Sha256};

/// Codes issued when MFA is enabled.
pub const RECOVERY_CODE_COUNT: usize = 10;

/// Characters per group; a code is two groups joined by `-`.
const GROUP_LEN: usize = 5;

/// Uppercase alphanumerics without look-alikes (0/O, 1/I).
const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

fn generate_group(rng: &mut impl RngExt) -> String {
    (0..GROUP_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Generate `count` codes formatted `XXXXX-XXXXX`.
pub fn generate_recovery_codes(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let head = generate_group(&mut rng);
            let tail = generate_group(&mut rng);
            format!("{head}-{tail}")
        })
        .collect()
}

/// Strip separators and whitespace and uppercase, so typed input matches.
pub fn normalize_recovery_code(code: &str) -> String {
    code.chars()
        .filter(|c| !matches!(c, '-' | ' ' | '\t'))
        .collect::<String>()
        .to_uppercase()
}

/// Hex SHA-256 of the normalized code.
pub fn hash_recovery_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize_recovery_code(code).as_bytes());
    hex::encode(hasher.finalize())
}
