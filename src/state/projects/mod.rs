mod intent;
mod reducer;
mod state;

pub use intent::ProjectsIntent;
pub use reducer::ProjectsReducer;
pub use state::{ProjectOrdering, ProjectsState};
