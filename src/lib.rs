//! # pmotracklist - Playlist bornée de morceaux musicaux
//!
//! Cette crate fournit un conteneur ordonné de morceaux à capacité fixe :
//! - Ajout en fin de liste et insertion positionnelle
//! - Retraits par index, par titre, en tête ou en queue
//! - Recherche par titre et durée totale
//! - Tri en place par durée croissante (tri par sélection)
//! - Concaténation de deux playlists
//!
//! # Architecture
//!
//! - **Playlist** : conteneur borné, seule source de vérité sur l'ordre et
//!   la taille logique
//! - **Track** : valeur immuable (titre, artiste, durée en secondes)
//!
//! Tout est synchrone et en mémoire : pas d'E/S, pas de persistance, pas de
//! verrouillage interne. Un hôte concurrent doit sérialiser lui-même les
//! appels mutateurs.
//!
//! # Exemple d'utilisation
//!
//! ```
//! use pmotracklist::{Playlist, Track};
//!
//! let mut playlist = Playlist::new(10);
//! assert!(playlist.push(Track::new("So What", "Miles Davis", 562)));
//! assert!(playlist.push(Track::new("Yesterday", "The Beatles", 125)));
//!
//! assert_eq!(playlist.len(), 2);
//! assert_eq!(playlist.total_duration(), 687);
//! assert_eq!(playlist.shortest_track_title().unwrap(), "Yesterday");
//!
//! playlist.sort_by_duration();
//! assert_eq!(playlist.get(0).unwrap().title(), "Yesterday");
//! ```

mod error;
mod playlist;
mod track;

// Réexports publics
pub use error::{Error, Result};
pub use playlist::Playlist;
pub use track::Track;
