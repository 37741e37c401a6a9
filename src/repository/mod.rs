use std::sync::{Arc, PoisonError, RwLock};

use crate::models::{Coordinate, Pacman};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Pacman store is unavailable: a writer panicked while holding the lock")]
    Poisoned,
}

/// In-memory store holding zero or one Pacman
#[derive(Debug, Clone, Default)]
pub struct PacmanRepository {
    slot: Arc<RwLock<Option<Pacman>>>,
}

impl PacmanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current player, if any.
    pub fn get_player(&self) -> Option<Pacman> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Stores `pacman` as the sole player. Callers check for an existing one.
    pub fn add_player(&self, pacman: Pacman) -> Result<(), RepositoryError> {
        let mut slot = self.slot.write().map_err(|_| RepositoryError::Poisoned)?;
        *slot = Some(pacman);
        Ok(())
    }

    /// Returns `false` if there is no player to update.
    pub fn set_location(&self, location: Coordinate) -> bool {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        match slot.as_mut() {
            Some(pacman) => {
                pacman.location = Some(location);
                true
            }
            None => false,
        }
    }

    pub fn clear_players(&self) {
        self.slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn starts_empty() {
        let repo = PacmanRepository::new();
        assert!(repo.get_player().is_none());
    }

    #[test]
    fn add_then_get_returns_the_player() {
        let repo = PacmanRepository::new();
        repo.add_player(Pacman::new(Coordinate::new(1.0, 2.0))).unwrap();

        let pacman = repo.get_player().unwrap();
        assert_eq!(pacman.location, Some(Coordinate::new(1.0, 2.0)));
    }

    #[test]
    fn clones_share_the_same_slot() {
        let repo = PacmanRepository::new();
        let handle = repo.clone();
        handle.add_player(Pacman::new(Coordinate::new(5.0, 6.0))).unwrap();

        assert!(repo.get_player().is_some());
    }

    #[test]
    fn clear_is_idempotent() {
        let repo = PacmanRepository::new();
        repo.clear_players();
        repo.add_player(Pacman::new(Coordinate::new(1.0, 2.0))).unwrap();
        repo.clear_players();
        repo.clear_players();
        assert!(repo.get_player().is_none());
    }

    #[test]
    fn set_location_without_player_is_rejected() {
        let repo = PacmanRepository::new();
        assert!(!repo.set_location(Coordinate::new(3.0, 4.0)));
        assert!(repo.get_player().is_none());
    }

    #[test]
    fn set_location_replaces_both_fields() {
        let repo = PacmanRepository::new();
        repo.add_player(Pacman::new(Coordinate::new(1.0, 2.0))).unwrap();

        assert!(repo.set_location(Coordinate::new(3.0, 4.0)));
        assert_eq!(
            repo.get_player().unwrap().location,
            Some(Coordinate::new(3.0, 4.0))
        );
    }

    #[test]
    fn readers_never_observe_a_mixed_location() {
        let repo = PacmanRepository::new();
        repo.add_player(Pacman::new(Coordinate::new(0.0, -0.0))).unwrap();

        let writer = {
            let repo = repo.clone();
            thread::spawn(move || {
                for i in 1..2_000 {
                    let v = i as f64;
                    repo.set_location(Coordinate::new(v, -v));
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let repo = repo.clone();
                thread::spawn(move || {
                    for _ in 0..2_000 {
                        let location = repo.get_player().unwrap().location.unwrap();
                        assert_eq!(location.latitude.unwrap(), -location.longitude.unwrap());
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }

    #[test]
    fn poisoned_slot_fails_add_but_not_reads() {
        let repo = PacmanRepository::new();
        let poisoner = repo.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.slot.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(
            repo.add_player(Pacman::new(Coordinate::new(1.0, 2.0))),
            Err(RepositoryError::Poisoned)
        ));
        assert!(repo.get_player().is_none());
        repo.clear_players();
    }
}
