use crate::ports::outbound::IdentifierGenerator;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// SystemIdentifierGenerator adapter: random v4 serials and the wall clock
pub struct SystemIdentifierGenerator;

impl SystemIdentifierGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemIdentifierGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierGenerator for SystemIdentifierGenerator {
    fn serial(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// FixedIdentifierGenerator adapter returning the same serial and timestamp
/// on every call
///
/// Used for reproducible output (`--reproducible` on the CLI) and for
/// comparing whole documents in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedIdentifierGenerator {
    serial: Uuid,
    now: DateTime<Utc>,
}

impl FixedIdentifierGenerator {
    pub fn new(serial: Uuid, now: DateTime<Utc>) -> Self {
        Self { serial, now }
    }

    /// Nil serial at the Unix epoch
    pub fn epoch() -> Self {
        Self::new(Uuid::nil(), DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl IdentifierGenerator for FixedIdentifierGenerator {
    fn serial(&self) -> Uuid {
        self.serial
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_generator_serials_are_unique() {
        let generator = SystemIdentifierGenerator::new();
        assert_ne!(generator.serial(), generator.serial());
        assert_eq!(generator.serial().get_version_num(), 4);
    }

    #[test]
    fn test_fixed_generator_is_stable() {
        let generator = FixedIdentifierGenerator::epoch();
        assert_eq!(generator.serial(), Uuid::nil());
        assert_eq!(generator.serial(), generator.serial());
        assert_eq!(generator.now().to_rfc3339(), "1970-01-01T00:00:00+00:00");
    }
}
