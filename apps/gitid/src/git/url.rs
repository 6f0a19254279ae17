//! Git remote URL helpers
//!
//! Only SSH-style remotes take part in reconciliation:
//! - SCP format: git@host:owner/repo.git
//! - SSH protocol: ssh://git@host[:port]/owner/repo.git

/// Whether the URL uses HTTP or HTTPS transport
pub fn is_http_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// Extract the SSH host (or host alias) from a remote URL
///
/// The host is the text after the first `@`, up to the first `:` or `/`.
/// Returns None for HTTP(S) URLs and for URLs without a `user@host` part.
pub fn ssh_hostname(url: &str) -> Option<String> {
    let url = url.trim();
    if is_http_url(url) {
        return None;
    }

    let (_, after_at) = url.split_once('@')?;
    let end = after_at.find([':', '/']).unwrap_or(after_at.len());
    let host = &after_at[..end];

    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
