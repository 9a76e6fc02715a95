use std::sync::{PoisonError, RwLock};
use studio_auth::{Navigator, Route};

/// Navigator for the command line: there is no view to switch, so the
/// current route is only remembered and logged.
#[derive(Debug)]
pub struct CliNavigator {
    current: RwLock<Option<Route>>,
}

impl CliNavigator {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Last route the session gate asked for.
    pub fn current(&self) -> Option<Route> {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CliNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for CliNavigator {
    fn navigate(&self, route: Route) {
        let previous = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(route);

        if previous != Some(route) {
            tracing::info!(route = route.path(), "Navigating");
        }
    }
}
