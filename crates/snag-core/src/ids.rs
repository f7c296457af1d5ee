//! Prefixed random id generation.
//!
//! Every record created by Snag gets a `<prefix>-<16 hex chars>` id minted
//! from the OS RNG. Ids are never reused; uniqueness rests on 64 random bits
//! per id, which is ample for the small record sets this service manages.
//!
//! User records are the exception: their id is the identity provider's user
//! id, so there is no user prefix here.

use std::fmt::Write;

/// Id prefix for projects (`prj-…`).
pub const PREFIX_PROJECT: &str = "prj";
/// Id prefix for defects (`def-…`).
pub const PREFIX_DEFECT: &str = "def";
/// Id prefix for defect comments (`cmt-…`).
pub const PREFIX_COMMENT: &str = "cmt";
/// Id prefix for history entries (`hst-…`).
pub const PREFIX_HISTORY: &str = "hst";

/// Generate a new prefixed random id, e.g. `"def-a3f8b2c14d06e911"`.
///
/// # Panics
///
/// Panics if the operating system RNG is unavailable; that failure is not
/// recoverable at this layer.
#[must_use]
pub fn generate(prefix: &str) -> String {
    let mut bytes = [0u8; 8];
    getrandom::fill(&mut bytes).expect("operating system RNG");

    let mut id = String::with_capacity(prefix.len() + 1 + 16);
    id.push_str(prefix);
    id.push('-');
    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(id, "{byte:02x}");
    }
    id
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generated_id_has_prefix_and_hex_tail() {
        let id = generate(PREFIX_DEFECT);
        let (prefix, tail) = id.split_once('-').unwrap();
        assert_eq!(prefix, "def");
        assert_eq!(tail.len(), 16);
        assert!(tail.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(generate(PREFIX_HISTORY)));
        }
    }
}
