use async_trait::async_trait;

use crate::MetadataValue;

// Child

/// A bound entity linked to a parent value of type `P`.
///
/// `parent` returns a value if and only if one has been assigned, and it is
/// the value most recently assigned.
#[async_trait]
pub trait Child<P>: MetadataValue
where
    P: MetadataValue,
{
    async fn parent(&self) -> Option<P>;

    /// Overwrites any previously assigned parent.
    async fn set_parent(&self, parent: &P);

    async fn has_parent(&self) -> bool {
        self.parent().await.is_some()
    }
}

/// Walks one step up from any [`Child`], without knowing its concrete type.
pub async fn parent_of<C, P>(child: &C) -> Option<P>
where
    C: Child<P>,
    P: MetadataValue,
{
    child.parent().await
}
