//! Record types returned by the rested server
//!
//! Listing endpoints return bare `{id, name}` pairs; the by-id endpoints
//! return full records. Stat fields use the server's abbreviated column
//! names (`str`, `dex`, `nte`, `emp`, `ntu`).

use serde::Deserialize;

/// One row of a name/id listing (`/characters/id,name`, `/places/id,name`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameId {
    pub id: i64,
    pub name: String,
}

/// A full character record from `/characters/<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    pub id: i64,
    pub name: String,
    #[serde(rename = "str", default)]
    pub strength: i64,
    #[serde(rename = "dex", default)]
    pub dexterity: i64,
    #[serde(rename = "nte", default)]
    pub intelligence: i64,
    #[serde(rename = "emp", default)]
    pub empathy: i64,
    #[serde(rename = "ntu", default)]
    pub intuition: i64,
}

impl Character {
    /// Stat rows in display order with their full labels.
    pub fn stat_rows(&self) -> [(&'static str, i64); 5] {
        [
            ("Strength", self.strength),
            ("Dexterity", self.dexterity),
            ("Intelligence", self.intelligence),
            ("Empathy", self.empathy),
            ("Intuition", self.intuition),
        ]
    }
}

/// A full place record from `/places/<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Place {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_id_listing() {
        let json = r#"[{"id":7,"name":"Alice"},{"id":2,"name":"Bob"}]"#;
        let rows: Vec<NameId> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 7);
        assert_eq!(rows[0].name, "Alice");
    }

    #[test]
    fn test_character_record() {
        let json = r#"[{"id":3,"name":"Alice","str":12,"dex":9,"nte":14,"emp":8,"ntu":11}]"#;
        let records: Vec<Character> = serde_json::from_str(json).unwrap();
        let c = &records[0];
        assert_eq!(c.name, "Alice");
        assert_eq!(c.strength, 12);
        assert_eq!(c.intelligence, 14);
        assert_eq!(c.intuition, 11);
    }

    #[test]
    fn test_character_missing_stats_default_to_zero() {
        let json = r#"{"id":3,"name":"Alice"}"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.strength, 0);
        assert_eq!(c.empathy, 0);
    }

    #[test]
    fn test_character_ignores_extra_fields() {
        let json = r#"{"id":3,"name":"Alice","str":1,"place":4,"notes":"x"}"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_stat_rows_order() {
        let c = Character {
            id: 1,
            name: "Alice".into(),
            strength: 1,
            dexterity: 2,
            intelligence: 3,
            empathy: 4,
            intuition: 5,
        };
        let labels: Vec<&str> = c.stat_rows().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            ["Strength", "Dexterity", "Intelligence", "Empathy", "Intuition"]
        );
    }

    #[test]
    fn test_place_record() {
        let json = r#"[{"id":5,"name":"Harbor","region":2}]"#;
        let records: Vec<Place> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].name, "Harbor");
    }
}
