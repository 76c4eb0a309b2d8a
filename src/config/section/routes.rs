//! `[[routes]]` validation.
//!
//! Route data is static, so every problem is caught here before generation
//! starts rather than surfacing as a malformed sitemap.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::route::{ROOT_PATH, RouteEntry};
use rustc_hash::FxHashSet;

const ROUTES: FieldPath = FieldPath::new("routes");
const ROUTES_PATH: FieldPath = FieldPath::new("routes.path");
const ROUTES_PRIORITY: FieldPath = FieldPath::new("routes.priority");

/// Validate the route table.
///
/// # Checks
/// - at least one route
/// - paths start with `/`, contain no `//` and no whitespace
/// - paths are unique
/// - priorities are within [0.0, 1.0]
/// - the root route `/` has priority `1.0`
pub fn validate_routes(routes: &[RouteEntry], diag: &mut ConfigDiagnostics) {
    if routes.is_empty() {
        diag.error_with_hint(
            ROUTES,
            "route table is empty",
            "remove `[[routes]]` entirely to use the built-in table",
        );
        return;
    }

    let mut seen = FxHashSet::default();
    for route in routes {
        let path = route.path.as_str();

        if !path.starts_with('/') {
            diag.error_with_hint(
                ROUTES_PATH,
                format!("`{path}` does not start with `/`"),
                format!("write it as \"/{}\"", path.trim_start_matches('/')),
            );
        } else if path.contains("//") {
            diag.error(ROUTES_PATH, format!("`{path}` contains `//`"));
        }
        if path.chars().any(char::is_whitespace) {
            diag.error(ROUTES_PATH, format!("`{path}` contains whitespace"));
        }
        if !seen.insert(path) {
            diag.error(ROUTES_PATH, format!("`{path}` is listed more than once"));
        }

        if !route.priority.is_valid() {
            diag.error(
                ROUTES_PRIORITY,
                format!("`{path}`: {} is outside [0.0, 1.0]", route.priority),
            );
        } else if path == ROOT_PATH && route.priority.value() != 1.0 {
            diag.error(
                ROUTES_PRIORITY,
                format!("`{ROOT_PATH}` must have priority 1.0, found {}", route.priority),
            );
        }
    }
}
