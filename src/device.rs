//! User agent based device detection.

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

/// Substrings that mark a mobile browser, matched case-insensitively.
pub const MOBILE_PATTERNS: [&str; 8] =
    ["Android", "webOS", "iPhone", "iPad", "iPod", "BlackBerry", "IEMobile", "Opera Mini"];

#[must_use]
pub fn is_mobile(user_agent: &str) -> bool {
    let haystack = user_agent.to_ascii_lowercase();
    MOBILE_PATTERNS
        .iter()
        .any(|pattern| haystack.contains(&pattern.to_ascii_lowercase()))
}
