pub mod record;
pub mod store;

pub use record::ConnectionRecord;
pub use store::{Store, STORE_FILE_NAME};
