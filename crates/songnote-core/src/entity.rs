//! Picks the entity whose metadata (title, artist, thumbnail) goes into the note.

use crate::songlink::{Entity, LinkAggregationRecord};

/// Provider whose entity supplies the metadata, whatever URL triggered the lookup.
pub const METADATA_PROVIDER: &str = "spotify";

/// First entity, in payload order, tagged with [`METADATA_PROVIDER`].
/// `None` when the track has no such entity; that is not an error.
pub fn select_entity(record: &LinkAggregationRecord) -> Option<&Entity> {
    record
        .entities_by_unique_id
        .values()
        .find(|e| e.api_provider.as_deref() == Some(METADATA_PROVIDER))
}
