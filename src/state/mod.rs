// ============================================================================
// STATE MODULE - Rc<RefCell> shared state + change notifications
// ============================================================================

pub mod app_state;
pub mod route;
pub mod session_state;

pub use app_state::AppState;
pub use route::Route;
pub use session_state::{SessionPhase, SessionState};
