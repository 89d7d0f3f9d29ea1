use std::collections::HashMap;

use super::pattern::PathPattern;

/// A registered view: its name, the layout it renders under and the path
/// pattern that selects it.
#[derive(Debug, Clone)]
pub struct ViewDescriptor {
    pub name: &'static str,
    pub layout: &'static str,
    pub pattern: PathPattern,
}

impl ViewDescriptor {
    pub fn new(name: &'static str, layout: &'static str, pattern: &str) -> Self {
        ViewDescriptor {
            name,
            layout,
            pattern: PathPattern::new(pattern),
        }
    }
}

/// Outcome of resolving a path: the winning descriptor plus the parameters
/// its pattern captured.
#[derive(Debug, Clone)]
pub struct ResolvedView<'a> {
    pub descriptor: &'a ViewDescriptor,
    pub params: HashMap<String, String>,
}

impl ResolvedView<'_> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered view registry. Descriptors are evaluated in registration order;
/// first match wins. Paths no descriptor claims resolve to the default
/// descriptor with no parameters, so resolution always succeeds. The
/// default's own pattern is never consulted.
pub struct ViewRegistry {
    descriptors: Vec<ViewDescriptor>,
    default: ViewDescriptor,
}

impl ViewRegistry {
    pub fn new(default: ViewDescriptor) -> Self {
        ViewRegistry {
            descriptors: Vec::new(),
            default,
        }
    }

    pub fn register(&mut self, descriptor: ViewDescriptor) {
        self.descriptors.push(descriptor);
    }

    pub fn resolve(&self, path: &str) -> ResolvedView<'_> {
        for descriptor in &self.descriptors {
            if let Some(params) = descriptor.pattern.matches(path) {
                tracing::debug!(view = descriptor.name, path, "view resolved");
                return ResolvedView { descriptor, params };
            }
        }
        tracing::debug!(view = self.default.name, path, "no view matched, using default");
        ResolvedView {
            descriptor: &self.default,
            params: HashMap::new(),
        }
    }
}

/// Build the portal's view registry.
pub fn default_registry() -> ViewRegistry {
    let mut registry = ViewRegistry::new(ViewDescriptor::new("not-found", "error", ""));

    // === Landing ===
    registry.register(ViewDescriptor::new("home", "portal", "/"));

    // === Business plans ===
    registry.register(ViewDescriptor::new(
        "business-plans",
        "portal",
        "/business-plans",
    ));
    registry.register(ViewDescriptor::new(
        "business-plans-period",
        "portal",
        "/business-plans/:start_year/:end_year",
    ));
    registry.register(ViewDescriptor::new(
        "business-plan-detail",
        "portal",
        "/business-plans/:id",
    ));

    // === Country programme ===
    registry.register(ViewDescriptor::new(
        "cp-reports",
        "portal",
        "/country-programme/reports",
    ));
    registry.register(ViewDescriptor::new(
        "cp-report-detail",
        "portal",
        "/country-programme/reports/:country/:year",
    ));

    // === Projects ===
    registry.register(ViewDescriptor::new("projects", "portal", "/projects"));
    registry.register(ViewDescriptor::new(
        "project-detail",
        "portal",
        "/projects/:code",
    ));

    // === Replenishment ===
    registry.register(ViewDescriptor::new(
        "replenishment-dashboard",
        "portal",
        "/replenishment/dashboard",
    ));
    registry.register(ViewDescriptor::new(
        "replenishment-status-files",
        "portal",
        "/replenishment/status-files",
    ));

    // === Meetings ===
    registry.register(ViewDescriptor::new("meetings", "portal", "/meetings"));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_path_falls_back_to_default() {
        let registry = default_registry();

        let resolved = registry.resolve("/no/such/page");

        assert_eq!(resolved.descriptor.name, "not-found");
        assert_eq!(resolved.descriptor.layout, "error");
        assert!(resolved.params.is_empty());
    }

    #[test]
    fn empty_path_resolves_to_home() {
        let registry = default_registry();

        assert_eq!(registry.resolve("").descriptor.name, "home");
        assert_eq!(registry.resolve("/").descriptor.name, "home");
    }
}
