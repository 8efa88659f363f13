mod error;
pub use error::{AppError, ErrorBody};

mod env;
pub use env::AppEnv;
