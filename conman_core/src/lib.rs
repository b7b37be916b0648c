pub mod address;
pub mod errors;
pub mod registry;
pub mod session;
pub mod storage;
pub mod utils;

// re‑export ergonomic entry points
pub use address::split_address;
pub use errors::{ConmanError, Result};
pub use registry::Registry;
pub use session::{Launcher, SshLauncher};
pub use storage::{ConnectionRecord, Store};
