pub mod authenticator;
pub mod error;
pub mod identity_client;
pub mod local_authenticator;
pub mod profile_cache;
pub mod reconciler;
pub mod remote_record;
pub mod role_policy;

pub use authenticator::{Authenticator, AuthenticatorChain, RemoteAuthenticator};
pub use error::{AuthError, Result};
pub use identity_client::{IdentityProvider, RemoteClientConfig, RemoteIdentityClient};
pub use local_authenticator::LocalAuthenticator;
pub use profile_cache::ProfileCache;
pub use reconciler::Reconciler;
pub use remote_record::RemoteIdentityRecord;
pub use role_policy::resolve_role;
