mod intent;
mod reducer;
mod state;

pub use intent::BusinessPlansIntent;
pub use reducer::BusinessPlansReducer;
pub use state::{BpStatus, BusinessPlansState};
