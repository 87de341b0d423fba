//! Identity adapters

mod deferred;
mod pem_directory;

pub use deferred::DeferredIdentityProvisioner;
pub use pem_directory::{PemDirectoryIssuer, CERTIFICATE_FILE, PRIVATE_KEY_FILE};
