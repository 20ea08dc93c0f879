pub mod client;
pub mod provider_a;
pub mod provider_b;

pub use client::{CarrierClient, DEFAULT_TIMEOUT};
pub use provider_a::ProviderAAdapter;
pub use provider_b::ProviderBAdapter;

#[cfg(test)]
pub(crate) mod fixtures;
