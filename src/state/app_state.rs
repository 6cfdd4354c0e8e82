// ============================================================================
// APP STATE - global application state
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::route::Route;
use crate::state::session_state::SessionState;

/// Global state shared by the render loop and every view
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    route: Rc<RefCell<Route>>,
    /// Bumped on every navigation. Pages capture the value before a
    /// fetch and drop the result if it changed while awaiting, so a view
    /// that was navigated away from never touches the live DOM.
    fetch_generation: Rc<RefCell<u64>>,
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            route: Rc::new(RefCell::new(Route::Home)),
            fetch_generation: Rc::new(RefCell::new(0)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get_route(&self) -> Route {
        *self.route.borrow()
    }

    pub fn set_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
        *self.fetch_generation.borrow_mut() += 1;
    }

    pub fn generation(&self) -> u64 {
        *self.fetch_generation.borrow()
    }

    /// Register a callback fired on every state change that needs a
    /// re-render (route change, session resolution, login/logout)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        let subscribers = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_bumps_the_fetch_generation() {
        let state = AppState::new();
        let before = state.generation();
        state.set_route(Route::DashboardSales);
        assert_eq!(state.get_route(), Route::DashboardSales);
        assert_eq!(state.generation(), before + 1);
    }
}
