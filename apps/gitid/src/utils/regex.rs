//! Compiled regex patterns for gitid
//!
//! Using once_cell ensures patterns are compiled only once and reused.

use once_cell::sync::Lazy;
use regex::Regex;

// Git config patterns
pub static GIT_SECTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Matches: [user], [remote "origin"], [core] ; trailing comments allowed
    Regex::new(r#"^\[\s*(?P<section>[A-Za-z0-9.-]+)(?:\s+"(?P<subsection>(?:[^"\\]|\\.)*)")?\s*\]\s*(?:[#;].*)?$"#)
        .expect("Invalid GIT_SECTION_REGEX pattern")
});

// Public key / UID patterns
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+"#)
        .expect("Invalid EMAIL_REGEX pattern")
});

pub static GPG_UID_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Matches: Name (comment) <email>
    Regex::new(r#"^(?P<name>.*?)\s*<(?P<email>[^>]*)>\s*$"#).expect("Invalid GPG_UID_REGEX pattern")
});
