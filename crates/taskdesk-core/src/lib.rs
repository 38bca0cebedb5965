pub mod error;
pub use error::{DeskError, StoreError};

pub mod session;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};

mod desk;
pub use desk::TaskDesk;
