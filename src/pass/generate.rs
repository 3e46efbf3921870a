//! Password generation.

use rand::Rng;
use zeroize::Zeroizing;

use super::charset;
use crate::settings::Settings;

/// Generate a password from the classes enabled in `settings`.
///
/// Returns `None` when no class is enabled; callers keep their previous
/// password in that case.
pub fn generate<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Option<Zeroizing<String>> {
    let chars = charset::build(settings);
    if chars.is_empty() {
        return None;
    }

    let mut buf = Zeroizing::new(Vec::with_capacity(settings.length));
    generate_from_charset(&chars, settings.length, rng, &mut buf);

    // Alphabets are ASCII only
    let pass: String = buf.iter().map(|&b| b as char).collect();
    Some(Zeroizing::new(pass))
}

/// Fill `buf` with `length` bytes sampled uniformly, with replacement.
#[inline]
pub fn generate_from_charset<R: Rng + ?Sized>(
    chars: &[u8],
    length: usize,
    rng: &mut R,
    buf: &mut Vec<u8>,
) {
    buf.clear();
    buf.extend((0..length).map(|_| random_byte(chars, rng)));
}

#[inline]
fn random_byte<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}
