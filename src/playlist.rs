//! Playlist : conteneur ordonné de morceaux à capacité fixe

use crate::track::Track;
use crate::{Error, Result};
use std::fmt;

/// Playlist bornée
///
/// Les morceaux occupent les positions `[0, len)` dans l'ordre de
/// présentation, sans trou ; `len` ne dépasse jamais `capacity`. La capacité
/// est fixée à la construction et ne change plus : quand la liste est
/// pleine, les ajouts sont refusés (pas d'éviction, pas de croissance).
///
/// Toutes les opérations sont synchrones et en mémoire. La structure ne
/// fournit aucune synchronisation : un hôte concurrent doit sérialiser
/// lui-même les appels mutateurs.
#[derive(Debug, Clone)]
pub struct Playlist {
    capacity: usize,
    tracks: Vec<Track>,
}

impl Playlist {
    /// Crée une playlist vide avec une capacité maximale
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            tracks: Vec::with_capacity(capacity),
        }
    }

    /// Retourne la capacité maximale
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Nombre de morceaux actuellement dans la liste
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Vérifie si la playlist est vide
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Vérifie si la playlist est pleine
    pub fn is_full(&self) -> bool {
        self.tracks.len() == self.capacity
    }

    /// Récupère un morceau par index
    ///
    /// Retourne `None` pour tout index hors de `[0, len)`.
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Vue en tranche des morceaux, dans l'ordre de la liste
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Itère sur les morceaux dans l'ordre de la liste
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Vide complètement la playlist
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Ajoute un morceau en fin de liste
    ///
    /// Si la liste est pleine, ne fait rien et retourne `false`.
    pub fn push(&mut self, track: Track) -> bool {
        if self.is_full() {
            tracing::debug!(
                "Playlist full ({} tracks), rejecting push of '{}'",
                self.capacity,
                track.title()
            );
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Insère un morceau à l'index donné
    ///
    /// Les morceaux aux positions `[index, len)` sont décalés d'une case
    /// vers la fin ; insérer à `index == len` équivaut à [`push`](Self::push).
    /// Si la liste est pleine ou si `index > len`, ne fait rien et retourne
    /// `false`.
    pub fn insert(&mut self, index: usize, track: Track) -> bool {
        if self.is_full() || index > self.tracks.len() {
            tracing::debug!(
                "Rejecting insert at index {} (size {}, capacity {})",
                index,
                self.tracks.len(),
                self.capacity
            );
            return false;
        }
        self.tracks.insert(index, track);
        true
    }

    /// Retire le morceau à l'index donné
    ///
    /// Les morceaux suivants sont décalés d'une case vers le début. Si la
    /// liste est vide ou si l'index est hors de `[0, len)`, ne fait rien.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.tracks.len() {
            self.tracks.remove(index);
        }
    }

    /// Retire les morceaux dont le titre correspond exactement
    ///
    /// Comparaison SENSIBLE à la casse, contrairement à
    /// [`index_of`](Self::index_of). Le balayage est en une seule passe :
    /// après un retrait, le curseur avance sans réexaminer le morceau décalé
    /// dans la case libérée. Deux titres identiques adjacents ne perdent
    /// donc que le premier par appel ; une correspondance non adjacente plus
    /// loin dans la liste est retirée dans la même passe.
    pub fn remove_by_title(&mut self, title: &str) {
        let mut i = 0;
        while i < self.tracks.len() {
            if self.tracks[i].title() == title {
                self.tracks.remove(i);
            }
            i += 1;
        }
    }

    /// Retire le premier morceau. Ne fait rien si la liste est vide.
    pub fn remove_first(&mut self) {
        self.remove_at(0);
    }

    /// Retire le dernier morceau. Ne fait rien si la liste est vide.
    pub fn remove_last(&mut self) {
        self.tracks.pop();
    }

    /// Cherche un titre et retourne l'index de la première correspondance
    ///
    /// Comparaison INSENSIBLE à la casse (asymétrie voulue avec
    /// [`remove_by_title`](Self::remove_by_title)). Retourne `None` si aucun
    /// morceau ne correspond.
    pub fn index_of(&self, title: &str) -> Option<usize> {
        let needle = title.to_lowercase();
        self.tracks
            .iter()
            .position(|track| track.title().to_lowercase() == needle)
    }

    /// Durée totale (en secondes) de tous les morceaux de la liste
    pub fn total_duration(&self) -> u64 {
        self.tracks
            .iter()
            .map(|track| u64::from(track.duration()))
            .sum()
    }

    /// Index du morceau le plus court à partir de `start` (inclus)
    ///
    /// Balayage linéaire de `[start, len)` ; à durées égales, l'index le
    /// plus petit gagne. Par exemple, sur les durées `7, 1, 6, 7, 5, 8, 7`,
    /// une recherche depuis l'index 2 retourne 4 (durée 5).
    ///
    /// Échoue avec [`Error::StartOutOfRange`] si `start >= len`, y compris
    /// sur une liste vide.
    pub fn shortest_track_from(&self, start: usize) -> Result<usize> {
        if start >= self.tracks.len() {
            return Err(Error::StartOutOfRange {
                start,
                size: self.tracks.len(),
            });
        }
        Ok(self.min_duration_index(start))
    }

    /// Titre du morceau le plus court de la liste
    ///
    /// Échoue avec [`Error::EmptyPlaylist`] si la liste est vide.
    pub fn shortest_track_title(&self) -> Result<&str> {
        if self.tracks.is_empty() {
            return Err(Error::EmptyPlaylist);
        }
        let index = self.min_duration_index(0);
        Ok(self.tracks[index].title())
    }

    /// Ajoute tous les morceaux d'une autre playlist en fin de liste
    ///
    /// Les morceaux de `other` sont copiés dans l'ordre, après les morceaux
    /// courants ; `other` n'est pas modifiée. Si la taille combinée dépasse
    /// la capacité, ne fait rien et retourne `false`.
    pub fn concatenate(&mut self, other: &Playlist) -> bool {
        if self.tracks.len() + other.tracks.len() > self.capacity {
            tracing::debug!(
                "Rejecting concatenate: {} + {} tracks exceeds capacity {}",
                self.tracks.len(),
                other.tracks.len(),
                self.capacity
            );
            return false;
        }
        self.tracks.extend(other.tracks.iter().cloned());
        true
    }

    /// Trie la liste en place par durée croissante
    ///
    /// Tri par sélection : pour chaque position, le morceau de durée
    /// minimale restant est échangé vers cette position. À durées égales,
    /// l'index le plus petit est sélectionné en premier.
    pub fn sort_by_duration(&mut self) {
        for i in 0..self.tracks.len() {
            let min_index = self.min_duration_index(i);
            self.tracks.swap(i, min_index);
        }
    }

    /// Index du minimum de durée sur `[start, len)`, `start` supposé valide
    fn min_duration_index(&self, start: usize) -> usize {
        let mut min_index = start;
        for i in (start + 1)..self.tracks.len() {
            if self.tracks[i].duration() < self.tracks[min_index].duration() {
                min_index = i;
            }
        }
        min_index
    }
}

impl fmt::Display for Playlist {
    /// Rendu multi-lignes : un morceau par ligne, dans l'ordre de la liste.
    /// Une liste vide produit la chaîne vide.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, track) in self.tracks.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", track)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
