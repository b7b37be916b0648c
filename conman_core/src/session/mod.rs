pub mod launcher;
pub mod ssh;

// Re-export the modules here for easy import elsewhere.
pub use launcher::*;
pub use ssh::*;
