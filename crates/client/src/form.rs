//! Spacing form state machine.
//!
//! ```text
//! Loading ──mount()──> Ready(record)
//!    │
//!    └──mount()──> NoProject ──create_project()──> Ready(record)
//! ```
//!
//! Edits apply to the in-memory record at once and schedule one debounced
//! save. When the save fires the guard is disarmed, all eight values are
//! validated and the whole record is PATCHed. Outcomes are published as
//! [`SaveEvent`]s.

use std::sync::Arc;
use std::time::Duration;

use spacing_core::spacing::{SpacingPatch, SpacingRecord};
use tokio::sync::{mpsc, RwLock};

use crate::api::{SpacingApiError, SpacingBackend};
use crate::debounce::Debouncer;
use crate::guard::NavigationGuard;
use crate::input::InputChange;
use crate::storage::ComponentStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Loading,
    /// No usable record; the user must create one. `error` says why a
    /// stored component could not be loaded, if that is the reason.
    NoProject { error: Option<String> },
    Ready(SpacingRecord),
}

impl FormState {
    pub fn record(&self) -> Option<&SpacingRecord> {
        match self {
            FormState::Ready(record) => Some(record),
            _ => None,
        }
    }
}

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveEvent {
    Saved { component_id: String },
    Failed { message: String },
}

/// State shared with the debounced save task.
struct Shared {
    backend: Arc<dyn SpacingBackend>,
    guard: Arc<dyn NavigationGuard>,
    state: RwLock<FormState>,
    events: mpsc::UnboundedSender<SaveEvent>,
}

impl Shared {
    async fn save(&self) {
        self.guard.set_dirty(false);

        let Some(record) = self.state.read().await.record().cloned() else {
            tracing::debug!("Save skipped, no record loaded");
            return;
        };

        let event = match self.write_back(&record).await {
            Ok(()) => {
                tracing::info!(component_id = %record.component_id, "Spacing saved");
                SaveEvent::Saved {
                    component_id: record.component_id,
                }
            }
            Err(e) => {
                tracing::warn!(
                    component_id = %record.component_id,
                    error = %e,
                    "Spacing save failed"
                );
                SaveEvent::Failed {
                    message: e.to_string(),
                }
            }
        };

        // The receiver may already be gone during shutdown.
        let _ = self.events.send(event);
    }

    async fn write_back(&self, record: &SpacingRecord) -> Result<(), SpacingApiError> {
        record
            .validate()
            .map_err(|e| SpacingApiError::Validation(e.to_string()))?;
        self.backend
            .patch_spacing(&record.component_id, &SpacingPatch::from(record))
            .await
    }
}

/// The spacing form for one component.
pub struct SpacingForm {
    shared: Arc<Shared>,
    store: Arc<dyn ComponentStore>,
    debouncer: Debouncer,
}

impl SpacingForm {
    /// Build a form in the `Loading` state.
    ///
    /// Returns the receiving end of the save-event channel alongside it.
    pub fn new(
        backend: Arc<dyn SpacingBackend>,
        store: Arc<dyn ComponentStore>,
        guard: Arc<dyn NavigationGuard>,
        save_delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<SaveEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let form = Self {
            shared: Arc::new(Shared {
                backend,
                guard,
                state: RwLock::new(FormState::Loading),
                events,
            }),
            store,
            debouncer: Debouncer::new(save_delay),
        };
        (form, rx)
    }

    pub async fn state(&self) -> FormState {
        self.shared.state.read().await.clone()
    }

    pub async fn record(&self) -> Option<SpacingRecord> {
        self.shared.state.read().await.record().cloned()
    }

    /// `true` while an edit is waiting to be saved.
    pub fn has_unsaved_changes(&self) -> bool {
        self.shared.guard.is_dirty()
    }

    /// Load the stored component, falling back to `NoProject`.
    pub async fn mount(&self) -> FormState {
        *self.shared.state.write().await = FormState::Loading;

        let next = match self.store.load().await {
            Ok(Some(component_id)) => match self.shared.backend.get_spacing(&component_id).await
            {
                Ok(record) => {
                    tracing::info!(%component_id, "Loaded spacing record");
                    FormState::Ready(record)
                }
                Err(e) => {
                    tracing::warn!(%component_id, error = %e, "Stored component could not be loaded");
                    FormState::NoProject {
                        error: Some(format!("could not load component {component_id}: {e}")),
                    }
                }
            },
            Ok(None) => {
                tracing::info!("No stored component");
                FormState::NoProject { error: None }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Component store unreadable");
                FormState::NoProject {
                    error: Some(e.to_string()),
                }
            }
        };

        *self.shared.state.write().await = next.clone();
        next
    }

    /// Create a new record, remember it and switch to it.
    ///
    /// A pending save for the previous record is flushed first.
    pub async fn create_project(&self) -> Result<SpacingRecord, SpacingApiError> {
        self.flush().await;

        let component_id = self.shared.backend.create_spacing().await?;
        self.store.save(&component_id).await?;
        let record = self.shared.backend.get_spacing(&component_id).await?;
        tracing::info!(%component_id, "Created spacing record");

        *self.shared.state.write().await = FormState::Ready(record.clone());
        Ok(record)
    }

    /// Apply an edit locally and (re)start the save timer.
    pub async fn edit(&self, change: InputChange) -> Result<(), SpacingApiError> {
        {
            let mut state = self.shared.state.write().await;
            let FormState::Ready(record) = &mut *state else {
                return Err(SpacingApiError::NotReady);
            };
            *record.property_mut(change.field) = change.property();
        }
        tracing::debug!(field = %change.field, value = %change.value, unit = %change.unit, "Spacing edited");

        self.shared.guard.set_dirty(true);
        let shared = Arc::clone(&self.shared);
        self.debouncer
            .schedule(move || async move { shared.save().await })
            .await;
        Ok(())
    }

    /// Run the pending save now. Returns `false` if nothing was pending.
    pub async fn flush(&self) -> bool {
        if !self.debouncer.cancel().await {
            return false;
        }
        self.shared.save().await;
        true
    }
}
