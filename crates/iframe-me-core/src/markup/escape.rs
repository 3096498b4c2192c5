//! Context-sensitive escaping for values placed in single-quoted HTML attributes.

/// Schemes allowed in an embedded `src`. Anything else renders as an empty URL.
const ALLOWED_SCHEMES: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "irc6", "ircs", "gopher", "nntp",
    "feed", "telnet", "mms", "rtsp", "sms", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

/// Percent-encoded CR, LF and NUL; stripped from URLs.
const ENCODED_CONTROLS: &[&str] = &["%0d", "%0a", "%00"];

/// Named character references kept as-is; any other `&name;` gets its `&` escaped.
const KNOWN_ENTITIES: &[&str] = &[
    "amp", "lt", "gt", "quot", "apos", "nbsp", "copy", "reg", "trade", "hellip", "mdash",
    "ndash", "lsquo", "rsquo", "sbquo", "ldquo", "rdquo", "bdquo", "laquo", "raquo", "bull",
    "middot", "deg", "times", "divide", "plusmn", "para", "sect", "cent", "pound", "yen",
    "euro", "iexcl", "iquest", "shy", "micro", "frac12", "frac14", "frac34", "sup1", "sup2",
    "sup3", "larr", "rarr", "uarr", "darr", "harr", "dagger", "Dagger", "permil", "prime",
    "Prime", "ensp", "emsp", "thinsp", "zwnj", "zwj", "lrm", "rlm",
];

/// Escape an attribute value: `&`, `<`, `>`, `"` and `'` become entities.
///
/// Entities already present in the input (`&amp;`, `&#039;`, `&#x27;`) are kept
/// as they are instead of being encoded a second time.
pub fn esc_attr(value: &str) -> String {
    replace_outside_entities(value, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#039;"),
        _ => None,
    })
}

/// Clean and escape a URL for a single-quoted `src` attribute.
///
/// - Leading whitespace is trimmed and spaces become `%20`.
/// - Characters outside the URL-safe set are dropped (`<`, `>`, `"`, `\`, controls...).
/// - Encoded CR/LF/NUL sequences are removed.
/// - A bare host or path (no `:`, not starting with `/`, `#` or `?`, not a
///   relative `name.php` script) gets `http://`.
/// - A scheme outside [`ALLOWED_SCHEMES`] yields an empty string.
/// - `&` is emitted as `&#038;` and `'` as `&#039;`.
pub fn esc_url(url: &str) -> String {
    let url = url.trim_start();
    if url.is_empty() {
        return String::new();
    }

    let mut cleaned = String::with_capacity(url.len());
    for c in url.chars() {
        if c == ' ' {
            cleaned.push_str("%20");
        } else if is_url_char(c) {
            cleaned.push(c);
        }
    }
    let mut cleaned = strip_encoded_controls(cleaned);
    if cleaned.is_empty() {
        return cleaned;
    }

    if !cleaned.contains(':')
        && !cleaned.starts_with(['/', '#', '?'])
        && !starts_with_php_script(&cleaned)
    {
        cleaned.insert_str(0, "http://");
    }

    if let Some(scheme) = scheme_of(&cleaned) {
        if !ALLOWED_SCHEMES
            .iter()
            .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
        {
            tracing::warn!(scheme, "dropping URL with disallowed scheme");
            return String::new();
        }
    }

    let normalized = replace_outside_entities(&cleaned, |c| (c == '&').then_some("&amp;"));
    normalized.replace("&amp;", "&#038;").replace('\'', "&#039;")
}

fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || !c.is_ascii() || "-~+_.?#=!&;,/:%@$|*'()[]".contains(c)
}

/// True for `[A-Za-z0-9-]+.php` at the start (case-insensitive), e.g. `index.php?page=1`.
fn starts_with_php_script(url: &str) -> bool {
    let Some(dot) = url.find('.') else {
        return false;
    };
    let name = &url[..dot];
    !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && url[dot + 1..]
            .get(..3)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("php"))
}

/// Text before the first `:`, if that colon comes before any `/`, `?` or `#`.
fn scheme_of(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let prefix = &url[..colon];
    if prefix.contains(['/', '?', '#']) {
        return None;
    }
    Some(prefix)
}

fn strip_encoded_controls(mut s: String) -> String {
    // One linear pass per round; a round can join the halves of another sequence.
    loop {
        let (next, removed) = remove_encoded_controls_once(&s);
        if !removed {
            return s;
        }
        s = next;
    }
}

fn remove_encoded_controls_once(s: &str) -> (String, bool) {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut removed = false;
    let mut i = 0;
    while i < s.len() {
        let hit = ENCODED_CONTROLS.iter().any(|needle| {
            bytes
                .get(i..i + needle.len())
                .is_some_and(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
        });
        if hit {
            i += 3;
            removed = true;
            continue;
        }
        // `%` is ASCII, so any other position is copied char by char.
        let c = s[i..].chars().next().unwrap_or_default();
        out.push(c);
        i += c.len_utf8();
    }
    (out, removed)
}

/// Apply `map` to every char not part of a well-formed character reference.
fn replace_outside_entities(value: &str, map: impl Fn(char) -> Option<&'static str>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(c) = rest.chars().next() {
        if c == '&' {
            if let Some(len) = entity_len(rest) {
                out.push_str(&rest[..len]);
                rest = &rest[len..];
                continue;
            }
        }
        match map(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Length of the character reference at the start of `s` (`&name;`, `&#123;`, `&#x1F;`).
fn entity_len(s: &str) -> Option<usize> {
    const MAX_NAME: usize = 32;

    let body = s.strip_prefix('&')?;
    let end = body.find(';')?;
    if end == 0 || end > MAX_NAME {
        return None;
    }
    let name = &body[..end];
    let valid = match name.strip_prefix('#') {
        Some(num) => match num.strip_prefix(['x', 'X']) {
            Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => !num.is_empty() && num.chars().all(|c| c.is_ascii_digit()),
        },
        None => KNOWN_ENTITIES.contains(&name),
    };
    valid.then_some(end + 2)
}
