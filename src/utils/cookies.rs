use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Cookie lifetime for the session token: 30 days.
pub const TOKEN_COOKIE_MAX_AGE_SECS: u32 = 2_592_000;

/// Scan a `;`-separated cookie string for a `token=` entry.
pub fn find_token(cookie_str: &str) -> Option<String> {
    for cookie in cookie_str.split(';') {
        if let Some((name, value)) = cookie.trim().split_once('=') {
            if name == "token" && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

pub fn read_token_cookie() -> Option<String> {
    let doc = html_document()?;
    let cookies = doc.cookie().ok()?;
    find_token(&cookies)
}

pub fn write_token_cookie(token: &str) {
    if let Some(doc) = html_document() {
        let cookie = format!("token={}; path=/; max-age={}", token, TOKEN_COOKIE_MAX_AGE_SECS);
        if doc.set_cookie(&cookie).is_err() {
            log::warn!("⚠️ Could not write token cookie");
        }
    }
}

pub fn clear_token_cookie() {
    if let Some(doc) = html_document() {
        if doc.set_cookie("token=; path=/; max-age=0").is_err() {
            log::warn!("⚠️ Could not clear token cookie");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::find_token;

    #[test]
    fn finds_token_among_cookies() {
        assert_eq!(
            find_token("theme=dark; token=abc.def.ghi; lang=en"),
            Some("abc.def.ghi".to_string())
        );
    }

    #[test]
    fn tolerates_whitespace_and_missing_entry() {
        assert_eq!(find_token("  token=xyz "), Some("xyz".to_string()));
        assert_eq!(find_token("theme=dark; lang=en"), None);
        assert_eq!(find_token(""), None);
    }

    #[test]
    fn ignores_empty_and_prefixed_names() {
        assert_eq!(find_token("token="), None);
        assert_eq!(find_token("csrf_token=abc"), None);
    }
}
