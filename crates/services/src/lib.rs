//! `opsdesk-services` — service subscriptions and expiration classification.
//!
//! Several panel surfaces render "days until expiry" badges. The bucket
//! boundaries live in exactly one place here ([`expiration::classify`]);
//! every consumer goes through it.

pub mod expiration;
pub mod service;

pub use expiration::{Expiration, ExpirationBucket, classify};
pub use service::{BillingCycle, Service, ServiceId, ServiceStatus};
