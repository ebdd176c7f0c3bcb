use regex_lite::Regex;
use std::sync::LazyLock;

// Loose "looks like a URL" shape: scheme://host, www.host or user@host,
// optionally followed by path, query and fragment. Not RFC 3986.
const URL_PATTERN: &str = r"^((([A-Za-z]{3,9}:(?://)?)(?:[-;:&=+$,\w]+@)?[A-Za-z0-9.-]+|(?:www\.|[-;:&=+$,\w]+@)[A-Za-z0-9.-]+)((?:/[-+~%/.\w]*)?\??(?:[-+=&;%@,.\w]*)#?(?:[,.!/\\\w]*))?)$";

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("URL pattern is a valid regex"));

/// Empty input counts as valid; required-ness is checked separately.
pub fn is_valid_url(url: &str) -> bool {
    url.is_empty() || URL_REGEX.is_match(url)
}
