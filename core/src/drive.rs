const DRIVE_HOST_MARKER: &str = "drive.google.com";
const DIRECT_VIEW_PREFIX: &str = "https://drive.google.com/uc?export=view&id=";
const LONG_ID_MIN_LEN: usize = 20;

/// Turn a sheet-supplied image reference into a URL an `<img>` can load.
/// Share links to Drive files are rewritten to the direct-view endpoint;
/// anything else passes through unchanged. Total: unresolvable input falls
/// back to `default_image`. Rules apply in order, first match wins.
pub fn resolve_image_link(link: &str, default_image: &str) -> String {
    if link.trim().is_empty() {
        return default_image.to_string();
    }
    if !link.contains(DRIVE_HOST_MARKER) {
        return link.to_string();
    }
    if let Some(id) = path_segment_id(link) {
        return format!("{DIRECT_VIEW_PREFIX}{id}");
    }
    if let Some(id) = query_param_id(link) {
        return format!("{DIRECT_VIEW_PREFIX}{id}");
    }
    if let Some(id) = long_token_id(link) {
        return format!("{DIRECT_VIEW_PREFIX}{id}");
    }
    default_image.to_string()
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// File id from a `/d/<id>` path segment.
fn path_segment_id(link: &str) -> Option<String> {
    let start = link.find("/d/")? + 3;
    let id: String = link[start..].chars().take_while(|&c| is_id_char(c)).collect();
    (!id.is_empty()).then_some(id)
}

/// File id from an `id=` query parameter. Only `?id=` and `&id=` count, so
/// parameters like `uid=` never match.
fn query_param_id(link: &str) -> Option<String> {
    for (idx, _) in link.match_indices("id=") {
        if !matches!(link[..idx].chars().last(), Some('?' | '&')) {
            continue;
        }
        let id: String = link[idx + 3..]
            .chars()
            .take_while(|&c| is_id_char(c))
            .collect();
        if !id.is_empty() {
            return Some(id);
        }
    }
    None
}

/// Last resort: the first run of 20+ id characters anywhere in the link.
fn long_token_id(link: &str) -> Option<String> {
    let mut run = String::new();
    for c in link.chars() {
        if is_id_char(c) {
            run.push(c);
            continue;
        }
        if run.len() >= LONG_ID_MIN_LEN {
            return Some(run);
        }
        run.clear();
    }
    (run.len() >= LONG_ID_MIN_LEN).then_some(run)
}

#[cfg(test)]
mod tests {
    use super::resolve_image_link;

    const DEFAULT: &str = "danialLogo-BG.png";

    fn resolve(link: &str) -> String {
        resolve_image_link(link, DEFAULT)
    }

    #[test]
    fn empty_or_whitespace_falls_back() {
        assert_eq!(resolve(""), DEFAULT);
        assert_eq!(resolve("   "), DEFAULT);
    }

    #[test]
    fn non_drive_links_pass_through_unchanged() {
        assert_eq!(resolve("https://x.com/pic.png"), "https://x.com/pic.png");
        assert_eq!(resolve("relative/pic.png"), "relative/pic.png");
    }

    #[test]
    fn file_share_link_uses_the_path_segment_id() {
        assert_eq!(
            resolve("https://drive.google.com/file/d/ABC123/view?usp=sharing"),
            "https://drive.google.com/uc?export=view&id=ABC123",
        );
    }

    #[test]
    fn open_link_uses_the_query_parameter_id() {
        assert_eq!(
            resolve("https://drive.google.com/open?id=XYZ789"),
            "https://drive.google.com/uc?export=view&id=XYZ789",
        );
    }

    #[test]
    fn uid_parameter_does_not_count_as_id() {
        assert_eq!(resolve("https://drive.google.com/open?uid=XYZ789"), DEFAULT);
    }

    #[test]
    fn bare_long_token_is_treated_as_an_id() {
        assert_eq!(
            resolve("https://drive.google.com/x/ABCDEFGHIJ0123456789_-"),
            "https://drive.google.com/uc?export=view&id=ABCDEFGHIJ0123456789_-",
        );
    }

    #[test]
    fn drive_link_without_any_id_falls_back() {
        assert_eq!(resolve("https://drive.google.com/garbage"), DEFAULT);
    }
}
