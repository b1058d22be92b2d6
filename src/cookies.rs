//! Cookie Access
//!
//! Read-only helpers over `document.cookie`.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

/// Read a cookie by name from the live document.
///
/// Returns the value as of this call; an absent cookie yields `None`, never a
/// stale earlier value.
pub fn get(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let raw = document.cookie().ok()?;
    find(&raw, name)
}

/// Scan a raw cookie string for `name`, percent-decoding the value.
///
/// When the name is shadowed, the last occurrence wins.
pub fn find(cookie_str: &str, name: &str) -> Option<String> {
    let mut value = None;
    for part in cookie_str.split(';') {
        let part = part.trim();
        if let Some(encoded) = part.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
            value = Some(percent_decode_str(encoded).decode_utf8_lossy().into_owned());
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::find;

    #[test]
    fn test_find_cookie() {
        let raw = "sessionid=abc123; csrftoken=tok42; theme=dark";
        assert_eq!(find(raw, "csrftoken"), Some("tok42".to_string()));
    }

    #[test]
    fn test_percent_decoded_value() {
        assert_eq!(find("csrftoken=a%3Db%2Fc", "csrftoken"), Some("a=b/c".to_string()));
    }

    #[test]
    fn test_missing_cookie() {
        assert_eq!(find("sessionid=abc123", "csrftoken"), None);
        assert_eq!(find("", "csrftoken"), None);
    }

    #[test]
    fn test_shadowed_cookie_last_wins() {
        let raw = "csrftoken=old; csrftoken=new";
        assert_eq!(find(raw, "csrftoken"), Some("new".to_string()));
    }

    #[test]
    fn test_name_prefix_does_not_match() {
        assert_eq!(find("csrftokens=zzz", "csrftoken"), None);
    }

    #[test]
    fn test_value_may_contain_equals() {
        assert_eq!(find("csrftoken=a=b", "csrftoken"), Some("a=b".to_string()));
    }
}
