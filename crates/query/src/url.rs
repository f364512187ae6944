//! Reading query parameters of page URLs (`q` on the search page,
//! `category` on the articles page)

use std::borrow::Cow;

const QUERY_PARAM: &str = "q";
const CATEGORY_PARAM: &str = "category";

/// Extract the search query from a URL or its query string
/// (`search.html?q=morning+adhkar`, `?q=dua` or `q=dua`).
///
/// Returns the trimmed value of the first `q` parameter. A missing parameter
/// or a value that does not decode to UTF-8 yields an empty string: the page
/// then shows its "type a keyword" prompt instead of failing.
pub fn query_from_url(url: &str) -> String {
    param_from_url(url, QUERY_PARAM)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// The lowercased `category` parameter of an articles page URL
/// (`articles.html?category=Faith`), or `None` when absent, blank or not
/// decodable.
pub fn category_from_url(url: &str) -> Option<String> {
    param_from_url(url, CATEGORY_PARAM)
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
}

/// Decoded value of the first `name` parameter. A value that fails to
/// decode counts as absent.
fn param_from_url(url: &str, name: &str) -> Option<String> {
    let search = match url.split_once('?') {
        Some((_, search)) => search,
        None => url,
    };
    let search = match search.split_once('#') {
        Some((search, _fragment)) => search,
        None => search,
    };

    for pair in search.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(key).as_deref() != Some(name) {
            continue;
        }
        return decode_component(value);
    }

    None
}

/// application/x-www-form-urlencoded decoding: `+` is a space, then `%XX`
fn decode_component(raw: &str) -> Option<String> {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    urlencoding::decode(&spaced).ok().map(Cow::into_owned)
}
