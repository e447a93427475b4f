//! `maven-wrapper.properties` content.

pub const DISTRIBUTION_URL_PROPERTY: &str = "distributionUrl";
pub const PROPERTIES_HEADER: &str = "Maven download properties";

/// The properties the launchers read at run time.
///
/// Only `distributionUrl` is ever written. Rendering is deterministic (no
/// timestamp comment), so regenerating an unchanged wrapper is a no-op on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperProperties {
    distribution_url: String,
}

impl WrapperProperties {
    pub fn new<S: Into<String>>(distribution_url: S) -> Self {
        Self { distribution_url: distribution_url.into() }
    }

    pub fn distribution_url(&self) -> &str {
        &self.distribution_url
    }

    /// Line-oriented `key=value` text with a single header comment.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push('#');
        out.push_str(PROPERTIES_HEADER);
        out.push('\n');
        out.push_str(&escape(DISTRIBUTION_URL_PROPERTY, true));
        out.push('=');
        out.push_str(&escape(&self.distribution_url, false));
        out.push('\n');
        out
    }
}

/// Escape only what would change how a properties reader splits or decodes the line.
fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (index, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{000c}' => out.push_str("\\f"),
            ' ' if is_key || index == 0 => out.push_str("\\ "),
            '=' | ':' | '#' | '!' if is_key => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || (c as u32) > 0x7e => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
            c => out.push(c),
        }
    }
    out
}
