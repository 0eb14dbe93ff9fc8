//! Core domain types for soundhz.
//!
//! This module defines the sound board and sound clip value types. Both are
//! immutable once constructed: every field is validated up front, so a value
//! of these types is always well-formed, and "editing" means building a new
//! value. Handing a board across an API boundary hands over an owned value,
//! which rules out aliasing between callers and the store.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named, described collection grouping playable sound entries.
///
/// The title acts as the board's external identity: removal matches it
/// case-insensitively. Multiple boards may share a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundBoard {
    title: String,
    description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sounds: Vec<SoundClip>,
}

/// A configured sound entry that can be played from a sound board.
///
/// The referenced audio file is never touched by this crate; `file_path` is
/// stored and handed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundClip {
    name: String,
    description: String,
    file_path: String,
}

impl SoundBoard {
    /// Create a new sound board with no sound clips.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty or whitespace-only.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        Self::with_sounds(title, description, Vec::new())
    }

    /// Create a new sound board holding the given sound clips.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty or whitespace-only.
    pub fn with_sounds(
        title: impl Into<String>,
        description: impl Into<String>,
        sounds: Vec<SoundClip>,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(Error::board_validation("title must not be blank"));
        }

        Ok(Self {
            title,
            description: description.into(),
            sounds,
        })
    }

    /// Known-good construction for built-in seed boards.
    pub(crate) fn seed(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            sounds: Vec::new(),
        }
    }

    /// The display title of the sound board.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Descriptive text about the sound board. May be empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The sound clips configured for this board, in insertion order.
    #[must_use]
    pub fn sounds(&self) -> &[SoundClip] {
        &self.sounds
    }

    /// Build a new board with the given clip appended.
    #[must_use]
    pub fn with_sound(mut self, sound: SoundClip) -> Self {
        self.sounds.push(sound);
        self
    }

    /// Check whether this board's title matches the given title,
    /// ignoring case.
    #[must_use]
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

impl SoundClip {
    /// Create a new sound clip.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is empty or whitespace-only.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        file_path: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let description = description.into();
        let file_path = file_path.into();

        if name.trim().is_empty() {
            return Err(Error::clip_validation("name must not be blank"));
        }
        if description.trim().is_empty() {
            return Err(Error::clip_validation("description must not be blank"));
        }
        if file_path.trim().is_empty() {
            return Err(Error::clip_validation("file_path must not be blank"));
        }

        Ok(Self {
            name,
            description,
            file_path,
        })
    }

    /// The display name of the sound.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptive text about the sound entry.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Path to the audio file associated with the entry.
    #[must_use]
    pub fn file_path(&self) -> &str {
        &self.file_path
    }
}

// Boards written by earlier versions of the application carry PascalCase
// field names, so field matching on read is case-insensitive. A record that
// violates the construction invariants is reported as a deserialization
// error, which the store treats as a corrupt document.
impl<'de> Deserialize<'de> for SoundBoard {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoardVisitor;

        impl<'de> Visitor<'de> for BoardVisitor {
            type Value = SoundBoard;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sound board object")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<SoundBoard, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut title: Option<String> = None;
                let mut description: Option<String> = None;
                let mut sounds: Option<Vec<SoundClip>> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.to_ascii_lowercase().as_str() {
                        "title" => title = Some(map.next_value()?),
                        "description" => description = Some(map.next_value()?),
                        "sounds" => sounds = Some(map.next_value()?),
                        _ => {
                            let _ = map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                let title = title.ok_or_else(|| de::Error::missing_field("title"))?;
                SoundBoard::with_sounds(
                    title,
                    description.unwrap_or_default(),
                    sounds.unwrap_or_default(),
                )
                .map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(BoardVisitor)
    }
}

impl<'de> Deserialize<'de> for SoundClip {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ClipVisitor;

        impl<'de> Visitor<'de> for ClipVisitor {
            type Value = SoundClip;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sound clip object")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<SoundClip, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut description: Option<String> = None;
                let mut file_path: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.to_ascii_lowercase().as_str() {
                        "name" => name = Some(map.next_value()?),
                        "description" => description = Some(map.next_value()?),
                        // "filePath" in documents written by earlier versions
                        "file_path" | "filepath" => file_path = Some(map.next_value()?),
                        _ => {
                            let _ = map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                let name = name.ok_or_else(|| de::Error::missing_field("name"))?;
                let description =
                    description.ok_or_else(|| de::Error::missing_field("description"))?;
                let file_path = file_path.ok_or_else(|| de::Error::missing_field("file_path"))?;
                SoundClip::new(name, description, file_path).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(ClipVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = SoundBoard::new("Retro", "Classic console bleeps.").unwrap();
        assert_eq!(board.title(), "Retro");
        assert_eq!(board.description(), "Classic console bleeps.");
        assert!(board.sounds().is_empty());
    }

    #[test]
    fn test_new_board_allows_empty_description() {
        let board = SoundBoard::new("Retro", "").unwrap();
        assert_eq!(board.description(), "");
    }

    #[test]
    fn test_new_board_rejects_blank_title() {
        assert!(SoundBoard::new("", "desc").is_err());
        assert!(SoundBoard::new("   ", "desc").is_err());
        assert!(SoundBoard::new("\t\n", "desc").is_err());
    }

    #[test]
    fn test_matches_title_ignores_case() {
        let board = SoundBoard::new("Retro", "").unwrap();
        assert!(board.matches_title("Retro"));
        assert!(board.matches_title("RETRO"));
        assert!(board.matches_title("retro"));
        assert!(!board.matches_title("Retr"));
    }

    #[test]
    fn test_with_sound_appends() {
        let clip = SoundClip::new("Coin", "Pickup chime", "sounds/coin.wav").unwrap();
        let board = SoundBoard::new("Retro", "").unwrap().with_sound(clip);
        assert_eq!(board.sounds().len(), 1);
        assert_eq!(board.sounds()[0].name(), "Coin");
    }

    #[test]
    fn test_new_clip_rejects_blank_fields() {
        assert!(SoundClip::new("", "desc", "a.wav").is_err());
        assert!(SoundClip::new("Coin", " ", "a.wav").is_err());
        assert!(SoundClip::new("Coin", "desc", "").is_err());
    }

    #[test]
    fn test_board_serialization_round_trip() {
        let clip = SoundClip::new("Laser", "Pew pew", "sounds/laser.ogg").unwrap();
        let board = SoundBoard::new("Sci-Fi", "Space sounds").unwrap().with_sound(clip);

        let json = serde_json::to_string(&board).unwrap();
        let back: SoundBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }

    #[test]
    fn test_board_serializes_stable_field_names() {
        let board = SoundBoard::new("Retro", "desc").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"description\""));
        // Empty clip lists stay off the wire
        assert!(!json.contains("sounds"));
    }

    #[test]
    fn test_board_deserializes_pascal_case_fields() {
        let json = r#"{"Title": "Retro", "Description": "Old consoles"}"#;
        let board: SoundBoard = serde_json::from_str(json).unwrap();
        assert_eq!(board.title(), "Retro");
        assert_eq!(board.description(), "Old consoles");
    }

    #[test]
    fn test_board_deserializes_mixed_case_fields() {
        let json = r#"{"TITLE": "Retro", "dEsCrIpTiOn": "Old consoles"}"#;
        let board: SoundBoard = serde_json::from_str(json).unwrap();
        assert_eq!(board.title(), "Retro");
        assert_eq!(board.description(), "Old consoles");
    }

    #[test]
    fn test_board_deserialize_defaults_missing_description() {
        let json = r#"{"title": "Retro"}"#;
        let board: SoundBoard = serde_json::from_str(json).unwrap();
        assert_eq!(board.description(), "");
    }

    #[test]
    fn test_board_deserialize_rejects_missing_title() {
        let json = r#"{"description": "no title here"}"#;
        assert!(serde_json::from_str::<SoundBoard>(json).is_err());
    }

    #[test]
    fn test_board_deserialize_rejects_blank_title() {
        let json = r#"{"title": "   ", "description": "blank"}"#;
        assert!(serde_json::from_str::<SoundBoard>(json).is_err());
    }

    #[test]
    fn test_board_deserialize_ignores_unknown_fields() {
        let json = r#"{"title": "Retro", "description": "x", "color": "teal"}"#;
        let board: SoundBoard = serde_json::from_str(json).unwrap();
        assert_eq!(board.title(), "Retro");
    }

    #[test]
    fn test_clip_deserializes_camel_case_file_path() {
        let json = r#"{"name": "Coin", "description": "Chime", "filePath": "c.wav"}"#;
        let clip: SoundClip = serde_json::from_str(json).unwrap();
        assert_eq!(clip.file_path(), "c.wav");
    }

    #[test]
    fn test_clip_deserialize_rejects_missing_file_path() {
        let json = r#"{"name": "Coin", "description": "Chime"}"#;
        assert!(serde_json::from_str::<SoundClip>(json).is_err());
    }

    #[test]
    fn test_board_with_sounds_deserializes() {
        let json = r#"
        {
            "title": "Retro",
            "description": "Old consoles",
            "sounds": [
                {"name": "Coin", "description": "Chime", "file_path": "coin.wav"}
            ]
        }"#;
        let board: SoundBoard = serde_json::from_str(json).unwrap();
        assert_eq!(board.sounds().len(), 1);
        assert_eq!(board.sounds()[0].file_path(), "coin.wav");
    }

    #[test]
    fn test_board_clone_is_independent() {
        let board = SoundBoard::new("Retro", "desc").unwrap();
        let copy = board.clone();
        let copy = copy.with_sound(SoundClip::new("Coin", "Chime", "c.wav").unwrap());
        assert!(board.sounds().is_empty());
        assert_eq!(copy.sounds().len(), 1);
    }
}
