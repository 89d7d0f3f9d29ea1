mod intent;
mod reducer;
mod state;

pub use intent::CpReportsIntent;
pub use reducer::CpReportsReducer;
pub use state::CpReportsState;
