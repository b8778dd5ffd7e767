mod hooks;
mod modal;
mod navigation;
mod settings;

pub use hooks::reduce_hooks;
pub use modal::reduce_modal;
pub use navigation::reduce_navigation;
pub use settings::reduce_settings;

use crate::app::ports::ApiTarget;
use crate::app::state::AppState;

/// Snapshot of the current addressing. Effects carry this copy so an
/// in-flight request keeps its target across a slug rename.
pub(crate) fn api_target(state: &AppState) -> ApiTarget {
    ApiTarget::new(&state.runtime.organization, &state.runtime.project)
}
