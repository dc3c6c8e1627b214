//! Response shape of the song.link `links` endpoint (only the fields we render).

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Cross-platform link record for one track.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkAggregationRecord {
    pub page_url: String,
    pub links_by_platform: LinksByPlatform,
    pub entities_by_unique_id: EntityMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub url: String,
}

/// Known platform keys. A platform the track is not available on is `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinksByPlatform {
    pub amazon_music: Option<Link>,
    pub amazon_store: Option<Link>,
    pub audiomack: Option<Link>,
    pub anghami: Option<Link>,
    pub boomplay: Option<Link>,
    pub deezer: Option<Link>,
    pub apple_music: Option<Link>,
    pub itunes: Option<Link>,
    pub pandora: Option<Link>,
    pub soundcloud: Option<Link>,
    pub tidal: Option<Link>,
    pub youtube: Option<Link>,
    pub youtube_music: Option<Link>,
    pub spotify: Option<Link>,
}

/// One platform's metadata for the track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub artist_name: Option<String>,
    pub thumbnail_url: Option<String>,
    pub api_provider: Option<String>,
}

/// `entitiesByUniqueId`, kept in the order the payload lists it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityMap(Vec<(String, Entity)>);

impl EntityMap {
    pub fn values(&self) -> impl Iterator<Item = &Entity> {
        self.0.iter().map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entity)> {
        self.0.iter().map(|(id, e)| (id.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, Entity)> for EntityMap {
    fn from_iter<I: IntoIterator<Item = (String, Entity)>>(iter: I) -> Self {
        EntityMap(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for EntityMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntityMapVisitor;

        impl<'de> Visitor<'de> for EntityMapVisitor {
            type Value = EntityMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of unique id to entity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<EntityMap, A::Error> {
                let mut entries: Vec<(String, Entity)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, entity)) = access.next_entry::<String, Entity>()? {
                    // Later duplicates replace earlier ones in place, as a JSON object would.
                    match entries.iter_mut().find(|slot| slot.0 == id) {
                        Some(slot) => slot.1 = entity,
                        None => entries.push((id, entity)),
                    }
                }
                Ok(EntityMap(entries))
            }
        }

        deserializer.deserialize_map(EntityMapVisitor)
    }
}
