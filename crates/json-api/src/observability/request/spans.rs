//! Route templates for span fields and metric labels.

const ID_PLACEHOLDER: &str = "{id}";

const COLLECTIONS: [&str; 2] = ["products", "users"];
const COLLECTION_ROUTES: [&str; 2] = ["categories", "search"];

/// Collapse id segments so metric labels stay low-cardinality.
///
/// Numeric segments anywhere, and any segment directly under a collection
/// that is not one of its named routes, become `{id}`.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut previous = "";

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            let is_numeric =
                !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit());
            let is_member = COLLECTIONS.contains(&previous)
                && !segment.is_empty()
                && !COLLECTION_ROUTES.contains(&segment);

            previous = segment;

            if is_numeric || is_member {
                ID_PLACEHOLDER
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}
