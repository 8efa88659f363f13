mod error;
pub use error::{json_rejection, search_error, similarity_error};

mod shutdown_signal;
pub use shutdown_signal::shutdown_signal;

mod state;
pub use state::AppState;
