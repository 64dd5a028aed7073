//! One-shot notices shown on the next rendered page.
//!
//! A notice survives exactly one redirect: it is written into a short-lived
//! cookie when the redirect is issued and cleared the first time a page
//! reads it. The message text is percent-encoded so arbitrary titles can be
//! carried in a cookie value.

use tower_cookies::{Cookie, Cookies};

pub const FLASH_COOKIE: &str = "flash";

/// Severity of a notice, mapped to a CSS class on render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Info,
    Danger,
}

impl FlashLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Info => "info",
            FlashLevel::Danger => "danger",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(FlashLevel::Success),
            "info" => Some(FlashLevel::Info),
            "danger" => Some(FlashLevel::Danger),
            _ => None,
        }
    }
}

/// A decoded notice ready for rendering
#[derive(Debug, Clone)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

/// Queue a notice for the next rendered page
pub fn set(cookies: &Cookies, level: FlashLevel, message: &str) {
    let mut cookie = Cookie::new(FLASH_COOKIE, cookie_value(level, message));
    cookie.set_path("/");
    cookies.add(cookie);
}

/// Take the pending notice, clearing it so it is shown only once
pub fn take(cookies: &Cookies) -> Option<Flash> {
    let raw = cookies.get(FLASH_COOKIE)?.value().to_string();

    let mut removal = Cookie::new(FLASH_COOKIE, "");
    removal.set_path("/");
    cookies.remove(removal);

    parse_value(&raw)
}

/// Encode a notice as a cookie-safe value: `<level>:<percent-encoded message>`
pub fn cookie_value(level: FlashLevel, message: &str) -> String {
    format!("{}:{}", level.as_str(), percent_encode(message))
}

fn parse_value(raw: &str) -> Option<Flash> {
    let (level, encoded) = raw.split_once(':')?;
    Some(Flash {
        level: FlashLevel::parse(level)?,
        message: percent_decode(encoded)?,
    })
}

/// Percent-encode everything outside the cookie-safe unreserved set
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let pair = bytes.get(i + 1..i + 3)?;
            let hex = std::str::from_utf8(pair).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
