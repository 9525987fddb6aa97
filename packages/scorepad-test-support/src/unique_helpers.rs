//! Unique test data, so tests sharing a directory never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`.
///
/// ```
/// use scorepad_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("dir");
/// assert_ne!(a, unique_str("dir"));
/// assert!(a.starts_with("dir-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// `count` distinct player names sharing one random suffix.
///
/// ```
/// use scorepad_test_support::unique_helpers::unique_names;
///
/// let names = unique_names(4);
/// assert_eq!(names.len(), 4);
/// assert!(names[0].starts_with("p1-"));
/// ```
pub fn unique_names(count: usize) -> Vec<String> {
    let tag = Ulid::new().to_string();
    let short = &tag[tag.len() - 6..];
    (1..=count).map(|i| format!("p{i}-{short}")).collect()
}
