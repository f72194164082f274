//! Cookie header helpers with hour-based expiry windows.

use chrono::{Duration, Utc};

const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Build a `Set-Cookie` value expiring the given number of hours from now.
pub fn build(name: &str, value: &str, hours: i64) -> String {
    let expires = (Utc::now() + Duration::hours(hours)).format(EXPIRES_FORMAT);
    format!("{name}={value}; expires={expires}; path=/")
}

/// Build a `Set-Cookie` value that deletes the cookie.
pub fn expired(name: &str) -> String {
    format!("{name}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/")
}

/// Read a cookie out of a `Cookie` request header.
pub fn read(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        pair.trim()
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
            .map(|value| value.to_string())
    })
}
