use zonewire_domain::{DomainError, Zone};

/// Source of the authoritative zone, read once at server start.
pub trait ZoneRepository: Send + Sync {
    fn load_zone(&self) -> Result<Zone, DomainError>;
}
