//! Deadline store: the user's deadline list with local durability.
//!
//! Mutations compute the next list, persist it, and only then swap it in.
//! The write lock is held across that sequence, so mutations never
//! interleave and a failed write leaves memory matching storage.

use std::sync::Arc;

use tokio::sync::RwLock;
use uplift_core::Result;
use uplift_core::deadline::{
    self, Deadline, DeadlineCategory, DeadlineIdGenerator, DeadlineRepository, NewDeadline,
    demo_deadlines,
};
use uplift_core::state::OperationState;

use crate::clock::Clock;

const ADD_FAILED: &str = "Failed to add deadline";
const TOGGLE_FAILED: &str = "Failed to update deadline";
const REMOVE_FAILED: &str = "Failed to remove deadline";
const SEED_FAILED: &str = "Failed to save demo deadlines";

/// Number of upcoming deadlines shown on the home screen.
pub const HOME_PREVIEW_LIMIT: usize = 3;

#[derive(Debug)]
struct DeadlineState {
    deadlines: Vec<Deadline>,
    loading: bool,
    operation: OperationState,
}

pub struct DeadlineStore {
    state: RwLock<DeadlineState>,
    repository: Arc<dyn DeadlineRepository>,
    ids: DeadlineIdGenerator,
    clock: Arc<dyn Clock>,
}

impl DeadlineStore {
    pub fn new(repository: Arc<dyn DeadlineRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(DeadlineState {
                deadlines: Vec::new(),
                loading: true,
                operation: OperationState::Idle,
            }),
            repository,
            ids: DeadlineIdGenerator::new(),
            clock,
        }
    }

    /// Restores the persisted list, seeding the demo list on first run.
    ///
    /// The store always leaves the loading state. A record that cannot be
    /// read starts an empty list and is left untouched on disk; a seed that
    /// cannot be written stays in memory. Both cases return the error.
    pub async fn initialize(&self) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.loading {
            return Ok(());
        }
        self.restore(&mut state).await
    }

    async fn restore(&self, state: &mut DeadlineState) -> Result<()> {
        state.loading = false;

        match self.repository.load_all().await {
            Ok(Some(deadlines)) => {
                tracing::info!(count = deadlines.len(), "Deadlines restored");
                state.deadlines = deadlines;
                Ok(())
            }
            Ok(None) => {
                let seed = demo_deadlines(self.clock.today());
                tracing::info!(count = seed.len(), "Seeding demo deadlines");
                let saved = self.repository.save_all(&seed).await;
                state.deadlines = seed;
                saved.map_err(|e| {
                    tracing::error!(error = %e, "Error saving demo deadlines");
                    e.into_persistence(SEED_FAILED)
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading deadlines");
                Err(e)
            }
        }
    }

    /// Appends a new open deadline and returns it.
    pub async fn add_deadline(&self, fields: NewDeadline) -> Result<Deadline> {
        let created = Deadline::new(self.ids.next_id(), fields);
        let entry = created.clone();
        self.commit(ADD_FAILED, move |current| {
            let mut next = current.to_vec();
            next.push(entry);
            next
        })
        .await?;

        tracing::info!(id = %created.id, title = %created.title, "Deadline added");
        Ok(created)
    }

    /// Flips the completion flag of the deadline with `id`.
    ///
    /// An unknown id leaves the list unchanged, but it is still written.
    pub async fn toggle_deadline_completion(&self, id: &str) -> Result<()> {
        self.commit(TOGGLE_FAILED, |current| {
            current
                .iter()
                .map(|d| if d.id == id { d.toggled() } else { d.clone() })
                .collect()
        })
        .await?;
        tracing::debug!(id, "Deadline toggled");
        Ok(())
    }

    pub async fn remove_deadline(&self, id: &str) -> Result<()> {
        self.commit(REMOVE_FAILED, |current| {
            current.iter().filter(|d| d.id != id).cloned().collect()
        })
        .await?;
        tracing::debug!(id, "Deadline removed");
        Ok(())
    }

    async fn commit<F>(&self, failure_message: &str, next_list: F) -> Result<()>
    where
        F: FnOnce(&[Deadline]) -> Vec<Deadline>,
    {
        let mut state = self.state.write().await;
        if state.loading {
            // The restored list is the base for the mutation, not the
            // empty placeholder.
            if let Err(e) = self.restore(&mut state).await {
                tracing::warn!(error = %e, "Deadline restore failed before mutation");
            }
        }
        let next = next_list(&state.deadlines);
        state.operation = OperationState::Pending;

        let result = self.repository.save_all(&next).await.map_err(|e| {
            tracing::error!(error = %e, "{}", failure_message);
            e.into_persistence(failure_message)
        });

        state.operation = OperationState::settled(&result);
        if result.is_ok() {
            state.deadlines = next;
        }
        result
    }

    // ============================================================================
    // Queries
    // ============================================================================

    pub async fn deadlines(&self) -> Vec<Deadline> {
        self.state.read().await.deadlines.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn operation(&self) -> OperationState {
        self.state.read().await.operation.clone()
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Open deadlines dated today or later, earliest first.
    pub async fn get_upcoming_deadlines(&self) -> Vec<Deadline> {
        let state = self.state.read().await;
        deadline::upcoming(&state.deadlines, self.clock.today())
    }

    /// The first few upcoming deadlines, as shown on the home screen.
    pub async fn upcoming_preview(&self, limit: usize) -> Vec<Deadline> {
        let mut upcoming = self.get_upcoming_deadlines().await;
        upcoming.truncate(limit);
        upcoming
    }

    pub async fn deadlines_by_category(&self, category: DeadlineCategory) -> Vec<Deadline> {
        let state = self.state.read().await;
        deadline::by_category(&state.deadlines, category)
    }
}
