pub mod config;
pub mod connectivity;
pub mod credentials;
pub mod workflows;

// Re-export the pieces the CLI and tests touch most
pub use config::SetupTargets;
pub use credentials::{CredentialPayload, ResponseResult};
