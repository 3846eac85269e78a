// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Slug derivation and validity checks for creator page URLs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length a derived slug is allowed to reach.
pub const MAX_SLUG_LEN: usize = 50;
/// Minimum length accepted by [`is_valid_slug`].
pub const MIN_SLUG_LEN: usize = 3;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());
static VALID_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Derive a URL-safe identifier from free text.
///
/// Lowercases and trims the input, turns every run of characters outside
/// `[a-z0-9]` into a single hyphen, strips hyphens from both ends and caps
/// the result at [`MAX_SLUG_LEN`]. A hyphen exposed by the cut is stripped
/// too, so the output never starts or ends with a hyphen, never contains
/// consecutive hyphens, and `normalize_slug` is idempotent.
pub fn normalize_slug(input: &str) -> String {
    let lowered = input.to_lowercase();
    let replaced = SEPARATORS.replace_all(lowered.trim(), "-");
    // Everything left is ASCII [a-z0-9-], so byte truncation is safe.
    let mut slug = replaced.trim_matches('-').to_string();
    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
    }
    slug.trim_end_matches('-').to_string()
}

/// Check a directly-edited slug: lowercase letters, digits and hyphens only,
/// at least [`MIN_SLUG_LEN`] characters. Runs whenever the slug field itself
/// is edited; derivation via [`normalize_slug`] does not go through it.
pub fn is_valid_slug(slug: &str) -> bool {
    slug.chars().count() >= MIN_SLUG_LEN && VALID_SLUG.is_match(slug)
}
