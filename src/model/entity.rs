//! Referenced MusicBrainz entities
//!
//! Only the fields the views display are modelled. Everything arrives
//! already resolved from the database layer.

use serde::Deserialize;

/// Kind of entity, used for link paths and report wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Area,
    Artist,
    Label,
    Release,
    Work,
}

impl EntityType {
    /// URL path segment (`/label/<gid>`)
    pub fn url_segment(&self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Artist => "artist",
            Self::Label => "label",
            Self::Release => "release",
            Self::Work => "work",
        }
    }
}

/// Common identity of linkable entities
pub trait Entity {
    fn entity_type(&self) -> EntityType;
    fn gid(&self) -> &str;
    fn name(&self) -> &str;

    /// Disambiguation comment (empty when there is none)
    fn comment(&self) -> &str {
        ""
    }
}

macro_rules! impl_entity {
    ($ty:ty, $kind:expr) => {
        impl Entity for $ty {
            fn entity_type(&self) -> EntityType {
                $kind
            }

            fn gid(&self) -> &str {
                &self.gid
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn comment(&self) -> &str {
                &self.comment
            }
        }
    };
}

/// A record label
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Label {
    pub id: u32,
    pub gid: String,
    pub name: String,
    #[serde(default)]
    pub comment: String,
}

/// A geographic area
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Area {
    pub id: u32,
    pub gid: String,
    pub name: String,
    #[serde(default)]
    pub comment: String,
    /// Enclosing areas, innermost first
    #[serde(default)]
    pub containment: Vec<Area>,
}

/// An artist
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Artist {
    pub id: u32,
    pub gid: String,
    pub name: String,
    #[serde(default)]
    pub comment: String,
}

/// A release
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Release {
    pub id: u32,
    pub gid: String,
    pub name: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub artist_credit: ArtistCredit,
}

/// A musical work
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Work {
    pub id: u32,
    pub gid: String,
    pub name: String,
    #[serde(default)]
    pub comment: String,
    /// Work type name (untranslated)
    #[serde(default, rename = "type")]
    pub work_type: Option<String>,
    #[serde(default)]
    pub iswcs: Vec<String>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub writers: Vec<WorkWriter>,
    /// Credits of recordings of this work
    #[serde(default)]
    pub artists: Vec<ArtistCredit>,
}

impl_entity!(Label, EntityType::Label);
impl_entity!(Area, EntityType::Area);
impl_entity!(Artist, EntityType::Artist);
impl_entity!(Release, EntityType::Release);
impl_entity!(Work, EntityType::Work);

/// Label type attribute
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabelType {
    pub id: u32,
    /// Untranslated type name, e.g. "Original Production"
    pub name: String,
}

/// One credited artist inside an artist credit
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtistCreditName {
    pub artist: Artist,
    /// Name as credited (may differ from the artist name)
    pub name: String,
    #[serde(default)]
    pub join_phrase: String,
}

/// Artist credit, e.g. "Simon & Garfunkel"
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ArtistCredit {
    #[serde(default)]
    pub names: Vec<ArtistCreditName>,
}

/// A writer of a work with their roles (lyricist, composer, ...)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkWriter {
    pub artist: Artist,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Lyrics language of a work
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Language {
    /// ISO 639-3 code
    pub code: String,
    pub name: String,
}

impl Language {
    /// Code used for works without lyrics
    pub const NO_LYRICS: &'static str = "zxx";
}
