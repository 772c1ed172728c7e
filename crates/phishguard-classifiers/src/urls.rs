//! URL extraction and structural checks

use phishguard_core::{Error, Result, Signal};
use regex::Regex;

/// Anything starting with a web scheme or `www.`, up to the next whitespace
const URL_PATTERN: &str = r"https?://\S+|www\.\S+";

/// Hosts with more labels than this look like subdomain stuffing
const MAX_HOST_LABELS: usize = 3;

/// Finds URL-like substrings in free text
pub struct UrlExtractor {
    pattern: Regex,
}

impl UrlExtractor {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(URL_PATTERN)
            .map_err(|e| Error::classifier(format!("Failed to compile URL regex: {}", e)))?;
        Ok(Self { pattern })
    }

    /// URL-like substrings in order of appearance
    pub fn extract<'a>(&self, message: &'a str) -> Vec<&'a str> {
        self.pattern.find_iter(message).map(|m| m.as_str()).collect()
    }

    /// Extract and parse every URL in the message
    pub fn inspect_all(&self, message: &str) -> Vec<InspectedUrl> {
        self.extract(message).into_iter().map(InspectedUrl::parse).collect()
    }
}

/// A matched URL split into the parts the structural checks look at.
///
/// Scheme and host are read from the text as written, without any
/// normalisation, so a numeric host such as `192.168.1` or `0x7f.1` is
/// judged on its literal labels. Bare `www.` matches have no authority
/// and keep an empty scheme and host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedUrl {
    pub raw: String,
    pub scheme: String,
    pub host: String,
}

impl InspectedUrl {
    pub fn parse(raw: &str) -> Self {
        let (scheme, host) = match raw.split_once("://") {
            Some((scheme @ ("http" | "https"), rest)) => {
                (scheme.to_string(), authority_host(rest).to_lowercase())
            }
            _ => (String::new(), String::new()),
        };

        Self {
            raw: raw.to_string(),
            scheme,
            host,
        }
    }

    pub fn is_insecure(&self) -> bool {
        self.scheme == "http"
    }

    pub fn host_labels(&self) -> usize {
        self.host.split('.').count()
    }

    pub fn has_excessive_subdomains(&self) -> bool {
        self.host_labels() > MAX_HOST_LABELS
    }

    /// Host is nothing but digits once the dots are removed
    pub fn is_numeric_host(&self) -> bool {
        let mut digits = self.host.chars().filter(|c| *c != '.').peekable();
        digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
    }

    /// Structural signals for this URL, in check order
    pub fn signals(&self) -> Vec<Signal> {
        let mut signals = Vec::new();
        if self.is_insecure() {
            signals.push(Signal::InsecureScheme);
        }
        if self.has_excessive_subdomains() {
            signals.push(Signal::ExcessiveSubdomains);
        }
        if self.is_numeric_host() {
            signals.push(Signal::IpAddressHost);
        }
        signals
    }
}

/// Host part of everything after `scheme://`: the authority ends at the
/// first `/`, `?` or `#`; userinfo and port are dropped.
fn authority_host(rest: &str) -> &str {
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

    match host_port.strip_prefix('[') {
        // Bracketed IPv6 literal; an unclosed bracket keeps the remainder
        Some(literal) => literal.split(']').next().unwrap_or_default(),
        None => host_port.split(':').next().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_urls() {
        let extractor = UrlExtractor::new().unwrap();
        let urls = extractor.extract(
            "Go to https://example.com/a?b=1 or http://x.y now, also www.test.org.",
        );
        assert_eq!(
            urls,
            vec!["https://example.com/a?b=1", "http://x.y", "www.test.org."]
        );
    }

    #[test]
    fn test_extract_is_case_sensitive() {
        let extractor = UrlExtractor::new().unwrap();
        assert!(extractor.extract("HTTPS://EXAMPLE.COM WWW.EXAMPLE.COM").is_empty());
        assert!(extractor.extract("no links here").is_empty());
    }

    #[test]
    fn test_secure_two_label_domain_is_clean() {
        let url = InspectedUrl::parse("https://example.com/login");
        assert_eq!(url.scheme, "https");
        assert_eq!(url.host, "example.com");
        assert!(url.signals().is_empty());
    }

    #[test]
    fn test_insecure_scheme() {
        let url = InspectedUrl::parse("http://example.com");
        assert_eq!(url.signals(), vec![Signal::InsecureScheme]);
    }

    #[test]
    fn test_subdomain_stuffing() {
        let url = InspectedUrl::parse("https://secure.login.bank.example.com");
        assert_eq!(url.host_labels(), 5);
        assert_eq!(url.signals(), vec![Signal::ExcessiveSubdomains]);

        let ok = InspectedUrl::parse("https://mail.example.co");
        assert!(!ok.has_excessive_subdomains());
    }

    #[test]
    fn test_ip_host() {
        // A dotted quad has four labels, so it also counts as too many subdomains
        let url = InspectedUrl::parse("http://192.168.10.5/verify");
        assert_eq!(
            url.signals(),
            vec![
                Signal::InsecureScheme,
                Signal::ExcessiveSubdomains,
                Signal::IpAddressHost
            ]
        );
    }

    #[test]
    fn test_port_is_not_part_of_host() {
        let url = InspectedUrl::parse("https://10.0.0.1:8443/");
        assert_eq!(url.host, "10.0.0.1");
        assert!(url.is_numeric_host());
    }

    #[test]
    fn test_unparseable_match_has_no_structure() {
        let url = InspectedUrl::parse("www.paypal.com.secure-login.ru");
        assert_eq!(url.scheme, "");
        assert_eq!(url.host, "");
        assert!(!url.is_numeric_host());
        assert!(url.signals().is_empty());

    }

    #[test]
    fn test_host_is_taken_as_written() {
        // Three labels, even though an IPv4 parser would expand it to four
        let short_ip = InspectedUrl::parse("http://192.168.1/");
        assert_eq!(short_ip.host, "192.168.1");
        assert_eq!(
            short_ip.signals(),
            vec![Signal::InsecureScheme, Signal::IpAddressHost]
        );

        // Hex label is not all digits
        let hex = InspectedUrl::parse("http://0x7f.1/");
        assert_eq!(hex.host, "0x7f.1");
        assert_eq!(hex.signals(), vec![Signal::InsecureScheme]);
    }

    #[test]
    fn test_unusual_host_keeps_scheme() {
        let url = InspectedUrl::parse("http://bad^host.com/");
        assert_eq!(url.scheme, "http");
        assert_eq!(url.host, "bad^host.com");
        assert_eq!(url.signals(), vec![Signal::InsecureScheme]);

        let broken = InspectedUrl::parse("http://[not-an-ip");
        assert_eq!(broken.host, "not-an-ip");
        assert_eq!(broken.signals(), vec![Signal::InsecureScheme]);
    }

    #[test]
    fn test_userinfo_port_and_path_are_stripped() {
        let url = InspectedUrl::parse("https://user:pw@Login.Example.com:8080/a/b?c=d#e");
        assert_eq!(url.host, "login.example.com");
        assert!(url.signals().is_empty());

        let query_only = InspectedUrl::parse("https://a.b.c.d.e?next=/x");
        assert_eq!(query_only.host, "a.b.c.d.e");
        assert_eq!(query_only.signals(), vec![Signal::ExcessiveSubdomains]);

        let ipv6 = InspectedUrl::parse("http://[::1]:8080/");
        assert_eq!(ipv6.host, "::1");
        assert_eq!(ipv6.signals(), vec![Signal::InsecureScheme]);
    }

    #[test]
    fn test_host_is_lowercased() {
        let url = InspectedUrl::parse("https://Example.COM");
        assert_eq!(url.host, "example.com");
    }
}
