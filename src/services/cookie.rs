//! Cookie 读取 - 业务能力层
//!
//! 纯函数：在原始 cookie 串中查找 `name=value` 段并做百分号解码。
//! 不修改任何状态。

/// 按名称读取 cookie 值
///
/// 找不到时返回 None
pub fn cookie_value(cookie_str: &str, name: &str) -> Option<String> {
    for segment in cookie_str.split(';') {
        let segment = segment.trim();
        if let Some(rest) = segment.strip_prefix(name) {
            if let Some(value) = rest.strip_prefix('=') {
                return Some(percent_decode(value));
            }
        }
    }
    None
}

/// 百分号解码（%XX），非法序列原样保留
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                decoded.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_in_the_middle() {
        let cookies = "a=1; csrf_token=abc123; b=2";
        assert_eq!(cookie_value(cookies, "csrf_token"), Some("abc123".to_string()));
    }

    #[test]
    fn absent_name_returns_none() {
        let cookies = "a=1; csrf_token=abc123; b=2";
        assert_eq!(cookie_value(cookies, "session"), None);
    }

    #[test]
    fn empty_cookie_string_returns_none() {
        assert_eq!(cookie_value("", "csrf_token"), None);
    }

    #[test]
    fn name_must_match_a_full_segment_prefix() {
        // "token" 不能命中 "csrf_token"
        assert_eq!(cookie_value("csrf_token=abc", "token"), None);
    }

    #[test]
    fn decodes_percent_sequences() {
        assert_eq!(
            cookie_value("csrf_token=a%3Db%20c", "csrf_token"),
            Some("a=b c".to_string())
        );
    }

    #[test]
    fn keeps_invalid_percent_sequences() {
        assert_eq!(
            cookie_value("t=%zz%4", "t"),
            Some("%zz%4".to_string())
        );
    }
}
