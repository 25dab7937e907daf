//! Property-based tests for slug and filename rules.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated titles.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use newpost::core::naming::{post_filename, slugify};
use newpost::core::types::{Slug, Title};

/// Straightforward four-pass form of the slug rules.
fn reference_slug(title: &str) -> String {
    let stripped: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();

    let mut collapsed = String::new();
    for c in stripped.chars() {
        if !(c == ' ' && collapsed.ends_with(' ')) {
            collapsed.push(c);
        }
    }

    collapsed.replace(' ', "-").to_lowercase()
}

/// Letters, digits and single spaces between words.
fn plain_title() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z0-9]{1,12}", 1..8).prop_map(|words| words.join(" "))
}

/// Anything printable, including punctuation and non-ASCII.
fn any_title() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,60}",
        "\\PC{0,40}",
        prop::collection::vec("[A-Za-z0-9]{1,6}|[ ,.!?'\"&:;()-]{1,4}", 0..12)
            .prop_map(|parts| parts.concat()),
    ]
}

proptest! {
    /// Slugs never contain characters outside [a-z0-9-].
    #[test]
    fn slug_charset(title in any_title()) {
        let slug = slugify(&title);
        prop_assert!(
            slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "bad slug {:?} for {:?}", slug, title
        );
        prop_assert!(Slug::new(slug).is_ok());
    }

    /// Single-pass slugify agrees with the four-pass definition.
    #[test]
    fn slug_matches_reference(title in any_title()) {
        prop_assert_eq!(slugify(&title), reference_slug(&title));
    }

    /// Plain titles: lowercase with spaces replaced by hyphens.
    #[test]
    fn plain_title_slug(title in plain_title()) {
        prop_assert_eq!(slugify(&title), title.to_lowercase().replace(' ', "-"));
    }

    /// Stripped punctuation never leaves doubled hyphens.
    #[test]
    fn no_double_hyphens(title in any_title()) {
        prop_assert!(!slugify(&title).contains("--"));
    }

    /// Slugifying the words of a slug gives the same slug back.
    #[test]
    fn slugify_is_stable_on_plain_output(title in plain_title()) {
        let once = slugify(&title);
        prop_assert_eq!(slugify(&once.replace('-', " ")), once.clone());
    }

    /// Joining words then slugifying ignores how the words were split.
    #[test]
    fn title_words_join(words in prop::collection::vec("[A-Za-z]{1,8}", 1..6)) {
        let title = Title::from_words(&words[..]).unwrap();
        prop_assert_eq!(title.as_str(), words.join(" "));
        let slug = Slug::from_title(&title);
        prop_assert_eq!(slug.as_str(), words.join("-").to_lowercase());
    }

    /// Filenames are `YYYY-MM-DD-<slug>.md`.
    #[test]
    fn filename_shape(
        title in any_title(),
        days in 0u64..40_000,
    ) {
        let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Days::new(days);
        let slug = Slug::from_title(&Title::from_words(&[title]).unwrap());
        let name = post_filename(date, &slug);

        let expected_prefix = date.format("%Y-%m-%d-").to_string();
        prop_assert!(name.starts_with(&expected_prefix));
        prop_assert!(name.ends_with(".md"));
        prop_assert_eq!(&name[11..name.len() - 3], slug.as_str());
    }
}
