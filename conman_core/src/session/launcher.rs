use crate::errors::Result;
use crate::storage::ConnectionRecord;

/// Hands the terminal over to an interactive session for a resolved record.
///
/// Implementations block until the session is over.
pub trait Launcher {
    fn launch(&self, record: &ConnectionRecord) -> Result<()>;
}
