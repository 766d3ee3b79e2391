//! Types d'erreurs pour pmotracklist

/// Erreurs de consultation d'une playlist
///
/// Les refus de capacité et les index positionnels hors bornes ne sont pas
/// des erreurs : ils sont signalés par un `bool` ou un `Option` selon
/// l'opération. Seules les requêtes dont le résultat n'existe pas du tout
/// (liste vide, départ de recherche invalide) passent par ce type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Playlist is empty")]
    EmptyPlaylist,

    #[error("Start index {start} out of range (size is {size})")]
    StartOutOfRange { start: usize, size: usize },
}

/// Type Result spécialisé pour pmotracklist
pub type Result<T> = std::result::Result<T, Error>;
