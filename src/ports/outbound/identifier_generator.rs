use chrono::{DateTime, Utc};
use uuid::Uuid;

/// IdentifierGenerator port supplying the per-document non-deterministic values
///
/// Both the serial number and the generation timestamp are drawn from here
/// exactly once per generation call, so a fixed implementation makes whole
/// documents comparable in tests.
pub trait IdentifierGenerator {
    /// A fresh document serial (CycloneDX serial number, SPDX namespace suffix)
    fn serial(&self) -> Uuid;

    /// The generation timestamp
    fn now(&self) -> DateTime<Utc>;
}
