//! In-memory artist directory
//!
//! Holds the directory for the lifetime of the process. Nothing is persisted;
//! a restart returns to the seeded entries.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use artistly_core::catalog::{Artist, ArtistStatus};
use artistly_core::ids::ArtistId;
use artistly_core::onboarding::ArtistApplication;
use artistly_core::ports::{ArtistRepositoryError, ArtistRepositoryPort};

use super::seed::seed_artists;

pub struct InMemoryArtistRepository {
    artists: RwLock<Vec<Artist>>,
}

impl InMemoryArtistRepository {
    /// Create repository with the given entries, kept in the given order
    pub fn new(artists: Vec<Artist>) -> Self {
        Self {
            artists: RwLock::new(artists),
        }
    }

    /// Create repository with the built-in directory
    pub fn seeded() -> Self {
        Self::new(seed_artists())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl Default for InMemoryArtistRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ArtistRepositoryPort for InMemoryArtistRepository {
    async fn list_all(&self) -> Result<Vec<Artist>, ArtistRepositoryError> {
        Ok(self.artists.read().await.clone())
    }

    async fn get(&self, id: ArtistId) -> Result<Option<Artist>, ArtistRepositoryError> {
        let artists = self.artists.read().await;
        Ok(artists.iter().find(|a| a.id == id).cloned())
    }

    async fn insert_pending(
        &self,
        application: &ArtistApplication,
    ) -> Result<Artist, ArtistRepositoryError> {
        let mut artists = self.artists.write().await;

        let id = artists
            .iter()
            .map(|a| a.id)
            .max()
            .map(ArtistId::next)
            .unwrap_or(ArtistId(1));

        let artist = Artist::from_application(id, application);
        artists.push(artist.clone());

        info!(
            artist_id = %id,
            application_id = %application.id,
            "Application added to directory as pending"
        );
        Ok(artist)
    }

    async fn set_status_if_pending(
        &self,
        id: ArtistId,
        status: ArtistStatus,
    ) -> Result<Artist, ArtistRepositoryError> {
        let mut artists = self.artists.write().await;
        let artist = artists
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ArtistRepositoryError::NotFound(id))?;

        if artist.status != ArtistStatus::Pending {
            return Err(ArtistRepositoryError::NotPending {
                id,
                status: artist.status,
            });
        }

        debug!(artist_id = %id, from = %artist.status, to = %status, "Updating artist status");
        artist.status = status;
        Ok(artist.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artistly_core::onboarding::FormData;

    fn application(name: &str) -> ArtistApplication {
        ArtistApplication::new(FormData {
            full_name: format!("  {name}  "),
            bio: "Sufi and ghazal vocalist.".into(),
            selected_categories: ["Singer".to_string()].into(),
            selected_languages: ["Urdu".to_string(), "Hindi".to_string()].into(),
            experience: "5-10".into(),
            price_range: "₹15,000-₹50,000".into(),
            location: "Hyderabad".into(),
            ..FormData::default()
        })
    }

    #[tokio::test]
    async fn seeded_repository_lists_directory_in_order() {
        let repo = InMemoryArtistRepository::seeded();
        let artists = repo.list_all().await.unwrap();

        assert_eq!(artists.len(), 12);
        assert_eq!(artists.first().unwrap().id, ArtistId(1));
        assert_eq!(artists.last().unwrap().id, ArtistId(12));
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_id() {
        let repo = InMemoryArtistRepository::seeded();

        assert_eq!(
            repo.get(ArtistId(3)).await.unwrap().unwrap().name,
            "Meera Nair"
        );
        assert!(repo.get(ArtistId(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_pending_assigns_next_id() {
        let repo = InMemoryArtistRepository::seeded();

        let first = repo.insert_pending(&application("Zoya Khan")).await.unwrap();
        let second = repo.insert_pending(&application("Imran Ali")).await.unwrap();

        assert_eq!(first.id, ArtistId(13));
        assert_eq!(second.id, ArtistId(14));
        assert_eq!(first.name, "Zoya Khan");
        assert_eq!(first.status, ArtistStatus::Pending);
        assert_eq!(repo.list_all().await.unwrap().len(), 14);
    }

    #[tokio::test]
    async fn insert_into_empty_directory_starts_at_one() {
        let repo = InMemoryArtistRepository::empty();
        let artist = repo.insert_pending(&application("Zoya Khan")).await.unwrap();
        assert_eq!(artist.id, ArtistId(1));
    }

    #[tokio::test]
    async fn set_status_updates_pending_entry() {
        let repo = InMemoryArtistRepository::seeded();

        let updated = repo
            .set_status_if_pending(ArtistId(6), ArtistStatus::Approved)
            .await
            .unwrap();
        assert_eq!(updated.status, ArtistStatus::Approved);
        assert_eq!(
            repo.get(ArtistId(6)).await.unwrap().unwrap().status,
            ArtistStatus::Approved
        );
    }

    #[tokio::test]
    async fn set_status_leaves_decided_entry_alone() {
        let repo = InMemoryArtistRepository::seeded();
        let err = repo
            .set_status_if_pending(ArtistId(1), ArtistStatus::Rejected)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ArtistRepositoryError::NotPending {
                id: ArtistId(1),
                status: ArtistStatus::Approved
            }
        ));
        assert_eq!(
            repo.get(ArtistId(1)).await.unwrap().unwrap().status,
            ArtistStatus::Approved
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_decisions_on_one_entry_have_one_winner() {
        let repo = std::sync::Arc::new(InMemoryArtistRepository::seeded());

        let approve = tokio::spawn({
            let repo = repo.clone();
            async move {
                repo.set_status_if_pending(ArtistId(10), ArtistStatus::Approved)
                    .await
            }
        });
        let reject = tokio::spawn({
            let repo = repo.clone();
            async move {
                repo.set_status_if_pending(ArtistId(10), ArtistStatus::Rejected)
                    .await
            }
        });
        let results = [approve.await.unwrap(), reject.await.unwrap()];

        let winners: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert_eq!(winners.len(), 1);
        let final_status = repo.get(ArtistId(10)).await.unwrap().unwrap().status;
        assert_eq!(winners[0].status, final_status);

        let loser = results.iter().find_map(|r| r.as_ref().err()).unwrap();
        assert!(matches!(
            loser,
            ArtistRepositoryError::NotPending { id: ArtistId(10), status } if *status == final_status
        ));
    }

    #[tokio::test]
    async fn set_status_on_unknown_id_is_not_found() {
        let repo = InMemoryArtistRepository::seeded();
        let err = repo
            .set_status_if_pending(ArtistId(42), ArtistStatus::Rejected)
            .await
            .unwrap_err();
        assert!(matches!(err, ArtistRepositoryError::NotFound(ArtistId(42))));
    }
}
