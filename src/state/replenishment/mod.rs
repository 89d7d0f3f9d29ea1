mod intent;
mod reducer;
mod state;

pub use intent::ReplenishmentIntent;
pub use reducer::ReplenishmentReducer;
pub use state::ReplenishmentState;
