/// Extract the object path from a storage locator URL.
///
/// The locator embeds the bucket name followed by the object path; the
/// marker is the bucket name plus a trailing slash (e.g.
/// `"business-photos/"`). Returns everything after the first occurrence of
/// the marker, or `None` when the marker is absent. Callers treat `None`
/// as a non-fatal anomaly and skip remote removal for that file.
pub fn storage_path_from_url<'a>(url: &'a str, marker: &str) -> Option<&'a str> {
    let start = url.find(marker)? + marker.len();
    Some(&url[start..])
}
