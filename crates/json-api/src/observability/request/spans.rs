//! HTTP span helpers.

use uuid::Uuid;

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path_for_span_name(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Collapse identifier segments so span names and metric labels stay bounded.
fn normalise_path_for_span_name(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if is_identifier(segment) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

fn is_identifier(segment: &str) -> bool {
    segment.parse::<i64>().is_ok() || Uuid::parse_str(segment).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_routes_keep_their_names() {
        let names = request_span_name("POST", "/api/cart/addToCart");

        assert_eq!(names.otel_path, "/api/cart/addToCart");
        assert_eq!(names.otel_span_name, "POST /api/cart/addToCart");
    }

    #[test]
    fn identifier_segments_are_collapsed() {
        let numeric = request_span_name("GET", "/items/42");
        let uuid = request_span_name("GET", "/items/0196f3a4-7a35-7c1e-9d6a-8f2b5c3e1d40/x");

        assert_eq!(numeric.otel_path, "/items/{id}");
        assert_eq!(uuid.otel_path, "/items/{id}/x");
    }

    #[test]
    fn root_path_is_preserved() {
        assert_eq!(request_span_name("GET", "/").otel_path, "/");
    }
}
