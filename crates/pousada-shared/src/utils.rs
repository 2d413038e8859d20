//! Utility functions

use crate::constants::RESERVED_SUBDOMAINS;

/// URL-safe slug, ASCII-folded ("Chalé da Serra" -> "chale-da-serra").
pub fn slugify(value: &str) -> String {
    slug::slugify(value)
}

pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        match local.chars().count() {
            0 => format!("***{}", domain),
            1 | 2 => format!("{}***{}", local.chars().next().unwrap_or('*'), domain),
            _ => format!("{}***{}", local.chars().take(2).collect::<String>(), domain),
        }
    } else {
        "***".to_string()
    }
}

/// Lowercases a `Host` header value and strips the port and trailing dot.
/// Returns `None` for empty hosts, IP literals and `localhost`.
pub fn normalize_host(raw: &str) -> Option<String> {
    let host = raw.trim();
    // IPv6 literal
    if host.starts_with('[') {
        return None;
    }
    let host = host
        .split(':')
        .next()
        .unwrap_or_default()
        .trim_end_matches('.')
        .to_ascii_lowercase();

    if host.is_empty() || host == "localhost" || host.parse::<std::net::IpAddr>().is_ok() {
        return None;
    }
    Some(host)
}

/// Extracts `<label>` from `<label>.<base_domain>`, skipping reserved labels.
pub fn subdomain_of<'a>(host: &'a str, base_domain: &str) -> Option<&'a str> {
    let base = base_domain.trim_start_matches('.');
    let label = host.strip_suffix(base)?.strip_suffix('.')?;
    if label.is_empty() || label.contains('.') || RESERVED_SUBDOMAINS.contains(&label) {
        return None;
    }
    Some(label)
}
