//! Deterministic, URL-safe slugs for post routing.
//!
//! ASCII slugification (`slug` crate) is bridged with Chinese
//! transliteration (`pinyin` crate), so a title like “威胁情报” becomes
//! `wei-xie-qing-bao`. Derivation is pure; uniqueness is the caller's
//! concern and is enforced through a predicate over the existing
//! collection.

use pinyin::{Pinyin, ToPinyin};
use slug::slugify;
use thiserror::Error;

const MAX_SUFFIX_ATTEMPTS: usize = 32;

/// Errors that can occur while deriving a slug from a title.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("failed to derive slug from `{input}`")]
    Unrepresentable { input: String },
    #[error("exhausted attempts to find a unique slug for `{base}`")]
    Exhausted { base: String },
}

/// Derive a base slug from a post title.
///
/// The result contains only lowercase ASCII letters, digits, and single
/// hyphens, with no leading or trailing hyphen. Titles that cannot yield
/// any slug characters are an error rather than an empty slug.
pub fn derive_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let transliterated = transliterate_to_ascii(input);
    let candidate = slugify(&transliterated);

    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(candidate)
}

/// Produce a slug that does not collide according to the supplied predicate.
///
/// `is_unique` must return `true` when the candidate slug is not already
/// taken in the collection. Colliding titles are disambiguated with a
/// monotonic suffix (`-2`, `-3`, …), bounded attempts.
pub fn generate_unique_slug<F>(input: &str, mut is_unique: F) -> Result<String, SlugError>
where
    F: FnMut(&str) -> bool,
{
    let base = derive_slug(input)?;

    if is_unique(&base) {
        return Ok(base);
    }

    for attempt in 2..=MAX_SUFFIX_ATTEMPTS + 1 {
        let candidate = format!("{base}-{attempt}");
        if is_unique(&candidate) {
            return Ok(candidate);
        }
    }

    Err(SlugError::Exhausted { base })
}

fn transliterate_to_ascii(input: &str) -> String {
    let mut output = String::with_capacity(input.len());

    for ch in input.chars() {
        if ch.is_ascii() {
            output.push(ch);
            continue;
        }

        match ch.to_pinyin() {
            Some(py) => append_pinyin(&mut output, py),
            None if ch.is_whitespace() => output.push(' '),
            None => {
                // Preserve unhandled characters so slugify can decide how to filter them.
                output.push(ch);
            }
        }
    }

    output
}

fn append_pinyin(buffer: &mut String, pinyin: Pinyin) {
    if !buffer.is_empty() && !buffer.ends_with(' ') {
        buffer.push(' ');
    }
    buffer.push_str(pinyin.plain());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_slug_strips_punctuation_runs() {
        let slug = derive_slug("Understanding Zero-Day Vulnerabilities!!").expect("slug");
        assert_eq!(slug, "understanding-zero-day-vulnerabilities");
    }

    #[test]
    fn derive_slug_output_stays_url_safe() {
        let titles = [
            "  OSINT -- the (quiet) recon phase  ",
            "Phishing: 2026 Edition",
            "SOC 2 / ISO 27001 / NIST",
        ];
        for title in titles {
            let slug = derive_slug(title).expect("slug");
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug}");
            assert!(!slug.contains("--"), "{slug}");
            assert!(
                slug.chars()
                    .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'),
                "{slug}"
            );
        }
    }

    #[test]
    fn derive_slug_transliterates_chinese() {
        let slug = derive_slug("威胁情报 101").expect("slug");
        assert_eq!(slug, "wei-xie-qing-bao-101");
    }

    #[test]
    fn derive_slug_rejects_empty_titles() {
        assert_eq!(derive_slug("   "), Err(SlugError::EmptyInput));
    }

    #[test]
    fn generate_unique_slug_appends_counter() {
        let mut existing = vec!["ransomware-defense-strategies".to_string()];
        let slug = generate_unique_slug("Ransomware Defense Strategies", |candidate| {
            if existing.contains(&candidate.to_string()) {
                false
            } else {
                existing.push(candidate.to_string());
                true
            }
        })
        .expect("unique slug");

        assert_eq!(slug, "ransomware-defense-strategies-2");
        assert!(existing.contains(&slug));
    }

    #[test]
    fn generate_unique_slug_exhausted() {
        let result =
            generate_unique_slug("Incident Report", |_| false).expect_err("should exhaust");
        assert_eq!(
            result,
            SlugError::Exhausted {
                base: "incident-report".to_string()
            }
        );
    }
}
