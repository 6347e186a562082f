// SPDX-License-Identifier: MPL-2.0
//! The kaomoji used by the random picker and the title easter egg.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Kaomoji picked from at random.
pub const KAOMOJI: [&str; 10] = [
    "(◕‿◕)",
    "(｡◕‿◕｡)",
    "(＾▽＾)",
    "(≧◡≦)",
    "(◡‿◡)",
    "(✿◠‿◠)",
    "(☆▽☆)",
    "(♥‿♥)",
    "(◕‿◕)♡",
    "(づ￣ ³￣)づ",
];

/// Picks a kaomoji with the thread-local generator.
#[must_use]
pub fn random() -> &'static str {
    random_with(&mut rand::rng())
}

/// Picks a kaomoji with `rng`.
pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    KAOMOJI.choose(rng).copied().unwrap_or(KAOMOJI[0])
}
