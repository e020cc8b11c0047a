use crate::error::ClubHubError;
use crate::seed::SeedDataset;
use crate::service::app_state::{
    AppState, DirectoryView, Dispatch, DispatchOutcome, PersistedState, UiEvent,
};
use crate::store::{PersistentStore, StoreKey};

use rand::SeedableRng;
use rand::rngs::StdRng;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use tracing::{debug, info};

/// Public messages handled by the directory actor.
#[derive(Debug)]
pub enum DirectoryActorMessage {
    /// Apply one user input event and persist whatever it changed.
    Dispatch(UiEvent, RpcReplyPort<DispatchOutcome>),
    /// Derive the current view.
    View(RpcReplyPort<DirectoryView>),
}

/// Startup arguments for the directory actor.
pub struct DirectoryArgs {
    pub seed: SeedDataset,
    pub store: PersistentStore,
    pub discover_tag_count: usize,
    /// Fixed seed for reproducible sessions; entropy when `None`.
    pub rng_seed: Option<u64>,
}

/// Handle for interacting with the directory actor.
#[derive(Clone)]
pub struct DirectoryHandle {
    actor: ActorRef<DirectoryActorMessage>,
}

impl DirectoryHandle {
    pub async fn dispatch(&self, event: UiEvent) -> Result<DispatchOutcome, ClubHubError> {
        ractor::call!(self.actor, DirectoryActorMessage::Dispatch, event)
            .map_err(|e| ClubHubError::RactorError(format!("Dispatch RPC failed: {e}")))
    }

    pub async fn view(&self) -> Result<DirectoryView, ClubHubError> {
        ractor::call!(self.actor, DirectoryActorMessage::View)
            .map_err(|e| ClubHubError::RactorError(format!("View RPC failed: {e}")))
    }

    pub fn stop(&self) {
        self.actor.stop(None);
    }
}

struct DirectoryActorState {
    app: AppState,
    store: PersistentStore,
}

struct DirectoryActor;

#[ractor::async_trait]
impl Actor for DirectoryActor {
    type Msg = DirectoryActorMessage;
    type State = DirectoryActorState;
    type Arguments = DirectoryArgs;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let store = args.store;
        let persisted = PersistedState {
            hearted_club_ids: store.load_or_default(StoreKey::HeartedClubIds).await,
            user_clubs: store.load_or_default(StoreKey::UserClubs).await,
            user_requests: store.load_or_default(StoreKey::UserRequests).await,
        };

        info!(
            seed_clubs = args.seed.clubs.len(),
            seed_vendors = args.seed.vendors.len(),
            seed_requests = args.seed.requests.len(),
            user_clubs = persisted.user_clubs.len(),
            user_requests = persisted.user_requests.len(),
            hearted = persisted.hearted_club_ids.len(),
            "DirectoryActor hydrated from store"
        );

        let rng = match args.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let app = AppState::new(args.seed, persisted, args.discover_tag_count, rng);
        debug!(tags = ?app.discover_tags(), "discover tags sampled");

        Ok(DirectoryActorState { app, store })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DirectoryActorMessage::Dispatch(event, rp) => {
                let outcome = self.handle_dispatch(state, event).await;
                let _ = rp.send(outcome);
            }
            DirectoryActorMessage::View(rp) => {
                let _ = rp.send(state.app.view());
            }
        }
        Ok(())
    }
}

impl DirectoryActor {
    async fn handle_dispatch(
        &self,
        state: &mut DirectoryActorState,
        event: UiEvent,
    ) -> DispatchOutcome {
        debug!(?event, "dispatch");
        let Dispatch { outcome, dirty } = state.app.dispatch(event);

        match &outcome {
            DispatchOutcome::Created { kind, id } => info!(?kind, id, "record created"),
            DispatchOutcome::Rejected(e) => debug!(error = %e, "form submission rejected"),
            DispatchOutcome::Ignored => debug!("event ignored in current state"),
            DispatchOutcome::Applied => {}
        }

        for key in dirty {
            Self::persist(state, key).await;
        }
        outcome
    }

    async fn persist(state: &DirectoryActorState, key: StoreKey) {
        let store = &state.store;
        match key {
            StoreKey::HeartedClubIds => store.save(key, state.app.hearted_ids()).await,
            StoreKey::UserClubs => store.save(key, state.app.user_clubs()).await,
            StoreKey::UserRequests => store.save(key, state.app.user_requests()).await,
        }
        debug!(%key, "entry written back");
    }
}

/// Spawn the directory actor, hydrating it from `args.store`.
pub async fn spawn(args: DirectoryArgs) -> Result<DirectoryHandle, ClubHubError> {
    // Unnamed: several directories may live in one process (tests, embedders).
    let (actor, _jh) = Actor::spawn(None, DirectoryActor, args)
        .await
        .map_err(|e| ClubHubError::RactorError(format!("failed to spawn DirectoryActor: {e}")))?;
    Ok(DirectoryHandle { actor })
}
