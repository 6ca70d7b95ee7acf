/// Remove empty headers and trim whitespace from the provided values.
pub(super) fn sanitize_headers(headers: Vec<String>) -> Vec<String> {
    headers
        .into_iter()
        .map(|header| header.trim().to_string())
        .filter(|header| !header.is_empty())
        .collect()
}

/// Determine a sensible default prompt title for the given endpoint.
///
/// The host serving the catalog is the closest thing this tool has to a
/// context label; fall back to a generic title when the URL does not parse.
pub(super) fn default_title_for(endpoint: &str) -> String {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| "apps".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_trimmed_and_filtered() {
        let headers = sanitize_headers(vec![" foo ".into(), "".into(), "bar".into()]);
        assert_eq!(headers, vec!["foo", "bar"]);
    }

    #[test]
    fn default_title_uses_the_endpoint_host() {
        assert_eq!(
            default_title_for("https://dashboard.example:8080/apps"),
            "dashboard.example"
        );
        assert_eq!(default_title_for("not a url"), "apps");
    }
}
