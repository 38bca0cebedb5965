//! Where the signed-in session lives between commands.

mod file;
pub use file::FileSessionStore;

mod memory;
pub use memory::MemorySessionStore;

use taskdesk_model::{Session, User};

use crate::error::StoreError;

/// Persistence for the single current session.
pub trait SessionStore: Send + Sync + 'static {
    fn load(&self) -> Result<Option<Session>, StoreError>;

    fn save(&self, session: &Session) -> Result<(), StoreError>;

    /// Forget the session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StoreError>;

    fn current_user(&self) -> Result<Option<User>, StoreError> {
        Ok(self.load()?.map(|session| session.user))
    }

    /// `Some` stores the session, `None` signs out.
    fn set(&self, session: Option<&Session>) -> Result<(), StoreError> {
        match session {
            Some(session) => self.save(session),
            None => self.clear(),
        }
    }
}
