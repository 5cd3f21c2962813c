//! Random version-4 identifiers used for product ids and login tokens.

use crate::random::RandomSource;
use uuid::Builder;

/// Generates a lower-case `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx` identifier.
///
/// All 122 free bits come from `rng`; the version nibble is fixed to `4` and
/// the variant nibble lands in `{8, 9, a, b}`. There is no collision check:
/// the value is a display token, not a key.
pub fn generate(rng: &dyn RandomSource) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}
