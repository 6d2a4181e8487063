pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
pub mod utils;

// Re-export handler functions for use in routing
pub use create::create;
pub use delete::delete;
pub use get::get;
pub use list::list;
pub use update::update;
