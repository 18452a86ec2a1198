use async_trait::async_trait;

use crate::errors::LookupError;
use crate::report::{PhoneReport, RegistrationReport};

/// Hexagonal port for vehicle-registration lookups.
///
/// Implementations must convert every internal failure into a `LookupError`;
/// callers only ever see the user-facing taxonomy.
#[async_trait]
pub trait RegistrationLookup: Send + Sync {
    async fn lookup(&self, code: &str) -> std::result::Result<RegistrationReport, LookupError>;
}

/// Hexagonal port for telephone-number lookups.
#[async_trait]
pub trait PhoneLookup: Send + Sync {
    async fn lookup(&self, candidate: &str) -> std::result::Result<PhoneReport, LookupError>;
}
