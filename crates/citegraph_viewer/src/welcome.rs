//! One-time welcome dialog cookie. Purely cosmetic: the graph views work
//! the same whether or not it is set.

pub const WELCOME_COOKIE_NAME: &str = "welcome";
pub const WELCOME_COOKIE_VALUE: &str = "1";
pub const WELCOME_COOKIE_MAX_AGE_DAYS: u64 = 30;

/// Value of `name` inside a `Cookie` header string (`a=1; b=2`).
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let pair = pair.trim_start();
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}

pub fn welcome_dismissed(header: &str) -> bool {
    cookie_value(header, WELCOME_COOKIE_NAME) == Some(WELCOME_COOKIE_VALUE)
}

/// `Set-Cookie` value that marks the welcome dialog as dismissed for the
/// next 30 days.
pub fn dismiss_welcome_cookie(domain: &str) -> String {
    let max_age = WELCOME_COOKIE_MAX_AGE_DAYS * 24 * 60 * 60;
    format!(
        "{WELCOME_COOKIE_NAME}={WELCOME_COOKIE_VALUE}; Max-Age={max_age}; Domain={domain}; path=/"
    )
}
