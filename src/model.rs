// File: src/model.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name + URL pair used by the API for a character's origin and last known location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    // Sub-species, usually empty.
    #[serde(rename = "type", default)]
    pub kind: String,
    // Free text. Observed: "Male", "Female", "Genderless", "unknown".
    pub gender: String,
    pub origin: LocationRef,
    pub location: LocationRef,
    pub image: String,
    /// Episode URLs in airing order.
    #[serde(rename = "episode", default)]
    pub episodes: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl Character {
    /// The labelled rows shown under the name on the detail screen.
    pub fn properties(&self) -> Vec<(&'static str, &str)> {
        let mut props = vec![
            ("Species", self.species.as_str()),
            ("Status", self.status.as_str()),
        ];
        if !self.kind.is_empty() {
            props.push(("Type", self.kind.as_str()));
        }
        props.push(("Origin", self.origin.name.as_str()));
        props.push(("Location", self.location.name.as_str()));
        props
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub air_date: String,
    /// Season/episode code, e.g. `S01E01`.
    #[serde(rename = "episode", default)]
    pub code: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// Paginated list envelope returned by the collection endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub info: PageInfo,
    pub results: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RICK: &str = r#"{
        "id": 1,
        "name": "Rick Sanchez",
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
        "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
        "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
        "episode": [
            "https://rickandmortyapi.com/api/episode/1",
            "https://rickandmortyapi.com/api/episode/2"
        ],
        "url": "https://rickandmortyapi.com/api/character/1",
        "created": "2017-11-04T18:48:46.250Z"
    }"#;

    #[test]
    fn test_character_parses_api_shape() {
        let c: Character = serde_json::from_str(RICK).unwrap();
        assert_eq!(c.id, 1);
        assert_eq!(c.gender, "Male");
        assert_eq!(c.origin.name, "Earth (C-137)");
        assert_eq!(c.episodes.len(), 2);
        assert!(c.created.is_some());
    }

    #[test]
    fn test_properties_skip_empty_type() {
        let mut c: Character = serde_json::from_str(RICK).unwrap();
        let keys: Vec<_> = c.properties().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Species", "Status", "Origin", "Location"]);

        c.kind = "Parasite".to_string();
        let keys: Vec<_> = c.properties().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Species", "Status", "Type", "Origin", "Location"]);
    }

    #[test]
    fn test_episode_code_renamed() {
        let json = r#"{"id": 28, "name": "The Ricklantis Mixup", "air_date": "September 10, 2017", "episode": "S03E07", "url": "https://rickandmortyapi.com/api/episode/28"}"#;
        let e: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(e.code, "S03E07");
        assert_eq!(e.name, "The Ricklantis Mixup");
    }
}
