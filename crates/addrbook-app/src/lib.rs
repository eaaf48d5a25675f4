pub mod commands;
pub mod error;
pub mod session;

pub use commands::Reply;
pub use error::AppError;
pub use session::BookSession;
