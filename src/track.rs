//! Track : un morceau musical immuable (titre, artiste, durée)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Un morceau musical
///
/// Valeur immuable une fois construite : la playlist ne modifie jamais les
/// champs d'un morceau, seulement sa position dans la liste. L'égalité est
/// structurelle ; les recherches par titre de [`Playlist`](crate::Playlist)
/// appliquent leurs propres règles de casse, indépendantes de `PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Titre du morceau
    title: String,

    /// Artiste ou interprète
    artist: String,

    /// Durée en secondes
    duration: u32,
}

impl Track {
    /// Crée un nouveau morceau
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
        }
    }

    /// Retourne le titre
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Retourne l'artiste
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Retourne la durée en secondes
    pub fn duration(&self) -> u32 {
        self.duration
    }
}

impl fmt::Display for Track {
    /// Rendu stable `"titre, artiste, durée"`, utilisé pour l'affichage
    /// ligne par ligne d'une playlist
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.title, self.artist, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_return_fields_unchanged() {
        let track = Track::new("So What", "Miles Davis", 562);

        assert_eq!(track.title(), "So What");
        assert_eq!(track.artist(), "Miles Davis");
        assert_eq!(track.duration(), 562);
    }

    #[test]
    fn test_display_is_title_artist_duration() {
        let track = Track::new("So What", "Miles Davis", 562);

        assert_eq!(track.to_string(), "So What, Miles Davis, 562");
    }
}
