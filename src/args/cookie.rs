//! Cookie header disassembly and reassembly.

use crate::args::registry::HEADER_FLAGS;
use crate::args::unit::ArgUnit;

/// Prefix of a rebuilt cookie header.
pub const COOKIE_PREFIX: &str = "Cookie: ";

/// Separator between crumbs inside a cookie header value.
pub const CRUMB_DELIMITER: &str = "; ";

/// Header value after a case-insensitive `Cookie:` name, if `header` is one.
fn cookie_value(header: &str) -> Option<&str> {
    let (name, value) = header.split_once(':')?;
    if !name.eq_ignore_ascii_case("cookie") {
        return None;
    }
    Some(value.strip_prefix(' ').unwrap_or(value))
}

/// Whether `unit` is a `-H 'Cookie: ...'` argument.
pub fn is_cookie_header(unit: &ArgUnit) -> bool {
    HEADER_FLAGS.contains(&unit.flag()) && unit.value().and_then(cookie_value).is_some()
}

/// Split every cookie header among `units` into crumbs, in order.
///
/// Duplicates across headers are kept as separate crumbs, and so are empty
/// crumbs inside a value (`a=1; ; b=2`), so that rejoining reproduces the
/// header text. Headers with an empty value contribute nothing.
pub fn split_crumbs<'a>(units: impl IntoIterator<Item = &'a ArgUnit>) -> Vec<String> {
    units
        .into_iter()
        .filter(|u| is_cookie_header(u))
        .filter_map(|u| u.value().and_then(cookie_value))
        .filter(|value| !value.is_empty())
        .flat_map(|value| value.split(CRUMB_DELIMITER))
        .map(str::to_string)
        .collect()
}

/// Header text preceding the crumbs of the first cookie header among
/// `units`, as captured (`"cookie: "` for an HTTP/2 browser capture).
pub fn cookie_prefix<'a>(units: impl IntoIterator<Item = &'a ArgUnit>) -> Option<String> {
    units
        .into_iter()
        .filter(|u| is_cookie_header(u))
        .find_map(|u| {
            let header = u.value()?;
            let value = cookie_value(header)?;
            Some(header[..header.len() - value.len()].to_string())
        })
}

/// Rebuild a single `-H '<prefix><crumbs>'` unit. `None` when there are no
/// crumbs.
pub fn cookie_unit(prefix: &str, crumbs: &[String]) -> Option<ArgUnit> {
    if crumbs.is_empty() {
        return None;
    }
    Some(ArgUnit::paired(
        "-H",
        format!("{}{}", prefix, crumbs.join(CRUMB_DELIMITER)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_cookie_headers() {
        assert!(is_cookie_header(&ArgUnit::paired("-H", "Cookie: a=1")));
        assert!(is_cookie_header(&ArgUnit::paired("--header", "cookie: a=1")));
        assert!(!is_cookie_header(&ArgUnit::paired("-H", "Accept: */*")));
        assert!(!is_cookie_header(&ArgUnit::paired("--data", "Cookie: a=1")));
        assert!(!is_cookie_header(&ArgUnit::single("-H")));
    }

    #[test]
    fn split_concatenates_headers_and_keeps_duplicates() {
        let units = vec![
            ArgUnit::paired("-H", "Cookie: a=1; b=2"),
            ArgUnit::paired("-H", "Accept: */*"),
            ArgUnit::paired("-H", "cookie: a=1"),
        ];
        assert_eq!(split_crumbs(&units), vec!["a=1", "b=2", "a=1"]);
    }

    #[test]
    fn split_then_rebuild_round_trips() {
        let original = ArgUnit::paired("-H", "Cookie: sid=abc; theme=dark; x=");
        let crumbs = split_crumbs([&original]);
        assert_eq!(cookie_unit(COOKIE_PREFIX, &crumbs), Some(original));
    }

    #[test]
    fn empty_crumbs_survive_the_round_trip() {
        for header in ["Cookie: a=1; ; b=2", "Cookie: a=1; ", "cookie:a=1;b=2"] {
            let original = ArgUnit::paired("-H", header);
            let prefix = cookie_prefix([&original]).unwrap();
            let crumbs = split_crumbs([&original]);
            assert_eq!(cookie_unit(&prefix, &crumbs), Some(original), "{}", header);
        }
        assert_eq!(
            split_crumbs([&ArgUnit::paired("-H", "Cookie: a=1; ; b=2")]),
            vec!["a=1", "", "b=2"]
        );
    }

    #[test]
    fn prefix_is_taken_from_first_cookie_header() {
        let units = vec![
            ArgUnit::paired("-H", "Accept: */*"),
            ArgUnit::paired("--header", "cookie: a=1"),
            ArgUnit::paired("-H", "Cookie: b=2"),
        ];
        assert_eq!(cookie_prefix(&units).as_deref(), Some("cookie: "));
        assert_eq!(cookie_prefix(&units[..1]), None);
    }

    #[test]
    fn valueless_headers_have_no_crumbs() {
        assert!(split_crumbs([&ArgUnit::paired("-H", "Cookie: ")]).is_empty());
        assert!(split_crumbs([&ArgUnit::paired("-H", "Cookie:")]).is_empty());
    }

    #[test]
    fn no_crumbs_means_no_header() {
        assert_eq!(cookie_unit(COOKIE_PREFIX, &[]), None);
    }
}
