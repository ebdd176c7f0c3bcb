mod url_pattern;

pub use url_pattern::is_valid_url;
