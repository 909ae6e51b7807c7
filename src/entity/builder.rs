use super::Entity;
use crate::{
    error::BuildError,
    MetadataType,
    MetadataValue,
};

// =============================================================================
// Builder
// =============================================================================

/// Builds an [`Entity`] with its parent supplied up front, so the entity is
/// never observable without one.
#[derive(Debug)]
pub struct Builder<R, P>
where
    R: MetadataType,
    P: MetadataValue,
{
    record: Option<R>,
    parent: Option<P>,
}

// -----------------------------------------------------------------------------
// Builder - Standard Traits
// -----------------------------------------------------------------------------

impl<R, P> Default for Builder<R, P>
where
    R: MetadataType,
    P: MetadataValue,
{
    fn default() -> Self {
        Self {
            record: None,
            parent: None,
        }
    }
}

// -----------------------------------------------------------------------------
// Builder - Methods
// -----------------------------------------------------------------------------

impl<R, P> Builder<R, P>
where
    R: MetadataType,
    P: MetadataValue,
{
    #[must_use]
    pub fn record(mut self, record: R) -> Self {
        self.record = Some(record);
        self
    }

    #[must_use]
    pub fn parent(mut self, parent: &P) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// A missing record falls back to the record type's default.
    pub fn build(self) -> Result<Entity<R, P>, BuildError> {
        let parent = self
            .parent
            .ok_or_else(|| BuildError::MissingParent { kind: R::kind() })?;

        Ok(Entity::create_internal(self.record, Some(parent)))
    }
}
