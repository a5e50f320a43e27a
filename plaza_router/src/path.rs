// Segment-level helpers shared by the table builder.

/// Joins a parent pattern and a child suffix into one full pattern.
pub(crate) fn join(parent: &str, child: &str) -> String {
    let parent = parent.trim_end_matches('/');
    let child = child.trim_start_matches('/');

    if child.is_empty() {
        if parent.is_empty() {
            "/".to_owned()
        } else {
            parent.to_owned()
        }
    } else {
        format!("{parent}/{child}")
    }
}

/// Returns the capture names declared in `pattern`, in order of appearance.
pub(crate) fn param_names(pattern: &str) -> Vec<&str> {
    pattern
        .split('/')
        .filter_map(|segment| {
            segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
        })
        .collect()
}
