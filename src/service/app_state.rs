//! The application state container and its event handling.
//!
//! `AppState` is plain data plus synchronous transitions; it performs no IO.
//! Every transition reports which persisted entries it changed so the owner can
//! write them back.

use crate::directory::{
    MASTER_TAGS, SearchQuery, filter_clubs, filter_records, id_set, merge, normalize,
    resolve_hearted, sample_tags, toggle_heart,
};
use crate::forms::{ClubForm, FormError, RequestForm};
use crate::seed::SeedDataset;
use crate::store::StoreKey;
use crate::types::{Club, ClubId, DiscoverMode, Vendor, VendorRequest};
use rand::rngs::StdRng;

/// Entries read from the store once at startup.
#[derive(Debug, Clone, Default)]
pub struct PersistedState {
    pub hearted_club_ids: Vec<ClubId>,
    pub user_clubs: Vec<Club>,
    pub user_requests: Vec<VendorRequest>,
}

/// The entry form currently shown in the overlay, with its draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    RegisterClub(ClubForm),
    PostRequest(RequestForm),
}

/// One user input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SetQuery(String),
    SetMode(DiscoverMode),
    ToggleTag(String),
    ToggleHeart(ClubId),
    OpenClubForm,
    OpenRequestForm,
    SetField { field: String, value: String },
    Submit,
    CloseModal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Club,
    Request,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Applied,
    /// The event does not apply in the current mode or modal state.
    Ignored,
    Created { kind: RecordKind, id: i64 },
    Rejected(FormError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub outcome: DispatchOutcome,
    pub dirty: Vec<StoreKey>,
}

impl Dispatch {
    fn clean(outcome: DispatchOutcome) -> Self {
        Self {
            outcome,
            dirty: Vec::new(),
        }
    }

    fn dirty(outcome: DispatchOutcome, key: StoreKey) -> Self {
        Self {
            outcome,
            dirty: vec![key],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub tag: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubCard {
    pub club: Club,
    pub hearted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results {
    Clubs(Vec<ClubCard>),
    Vendors(Vec<Vendor>),
    Requests(Vec<VendorRequest>),
}

impl Results {
    pub fn len(&self) -> usize {
        match self {
            Results::Clubs(items) => items.len(),
            Results::Vendors(items) => items.len(),
            Results::Requests(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView {
    pub mode: DiscoverMode,
    pub query: String,
    pub chips: Vec<TagChip>,
    pub hearted: Vec<Club>,
    pub results: Results,
    pub modal: Option<Modal>,
}

pub struct AppState {
    seed: SeedDataset,
    user_clubs: Vec<Club>,
    user_requests: Vec<VendorRequest>,
    hearted: Vec<ClubId>,
    selected_tags: Vec<String>,
    query_text: String,
    query: SearchQuery,
    mode: DiscoverMode,
    discover_tags: Vec<String>,
    modal: Option<Modal>,
    rng: StdRng,
}

impl AppState {
    /// Builds the session state. The discover chips are sampled here and never again.
    pub fn new(
        seed: SeedDataset,
        persisted: PersistedState,
        discover_tag_count: usize,
        mut rng: StdRng,
    ) -> Self {
        let discover_tags = sample_tags(&MASTER_TAGS, discover_tag_count, &mut rng);
        Self {
            seed,
            user_clubs: persisted.user_clubs,
            user_requests: persisted.user_requests,
            hearted: persisted.hearted_club_ids,
            selected_tags: Vec::new(),
            query_text: String::new(),
            query: SearchQuery::default(),
            mode: DiscoverMode::default(),
            discover_tags,
            modal: None,
            rng,
        }
    }

    pub fn discover_tags(&self) -> &[String] {
        &self.discover_tags
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    pub fn hearted_ids(&self) -> &[ClubId] {
        &self.hearted
    }

    pub fn user_clubs(&self) -> &[Club] {
        &self.user_clubs
    }

    pub fn user_requests(&self) -> &[VendorRequest] {
        &self.user_requests
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn clubs(&self) -> Vec<Club> {
        merge(&self.seed.clubs, &self.user_clubs)
    }

    pub fn requests(&self) -> Vec<VendorRequest> {
        merge(&self.seed.requests, &self.user_requests)
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Dispatch {
        match event {
            UiEvent::SetQuery(text) => {
                self.query = SearchQuery::new(&text);
                self.query_text = text;
                Dispatch::clean(DispatchOutcome::Applied)
            }
            UiEvent::SetMode(mode) => {
                self.mode = mode;
                Dispatch::clean(DispatchOutcome::Applied)
            }
            UiEvent::ToggleTag(tag) => self.toggle_tag(tag),
            UiEvent::ToggleHeart(id) => {
                if self.mode != DiscoverMode::Clubs {
                    return Dispatch::clean(DispatchOutcome::Ignored);
                }
                toggle_heart(&mut self.hearted, id);
                Dispatch::dirty(DispatchOutcome::Applied, StoreKey::HeartedClubIds)
            }
            UiEvent::OpenClubForm => self.open(Modal::RegisterClub(ClubForm::default())),
            UiEvent::OpenRequestForm => {
                if self.mode != DiscoverMode::Requests {
                    return Dispatch::clean(DispatchOutcome::Ignored);
                }
                self.open(Modal::PostRequest(RequestForm::default()))
            }
            UiEvent::SetField { field, value } => {
                let result = match self.modal.as_mut() {
                    Some(Modal::RegisterClub(form)) => form.set(&field, value),
                    Some(Modal::PostRequest(form)) => form.set(&field, value),
                    None => return Dispatch::clean(DispatchOutcome::Ignored),
                };
                match result {
                    Ok(()) => Dispatch::clean(DispatchOutcome::Applied),
                    Err(e) => Dispatch::clean(DispatchOutcome::Rejected(e)),
                }
            }
            UiEvent::Submit => self.submit(),
            UiEvent::CloseModal => {
                if self.modal.take().is_none() {
                    return Dispatch::clean(DispatchOutcome::Ignored);
                }
                Dispatch::clean(DispatchOutcome::Applied)
            }
        }
    }

    fn toggle_tag(&mut self, tag: String) -> Dispatch {
        let wanted = normalize(&tag);
        if self.mode != DiscoverMode::Clubs || wanted.is_empty() {
            return Dispatch::clean(DispatchOutcome::Ignored);
        }
        match self
            .selected_tags
            .iter()
            .position(|t| normalize(t) == wanted)
        {
            Some(pos) => {
                self.selected_tags.remove(pos);
            }
            None => self.selected_tags.push(tag.trim().to_string()),
        }
        Dispatch::clean(DispatchOutcome::Applied)
    }

    fn open(&mut self, modal: Modal) -> Dispatch {
        if self.modal.is_some() {
            return Dispatch::clean(DispatchOutcome::Ignored);
        }
        self.modal = Some(modal);
        Dispatch::clean(DispatchOutcome::Applied)
    }

    fn submit(&mut self) -> Dispatch {
        match self.modal.as_mut() {
            None => Dispatch::clean(DispatchOutcome::Ignored),
            Some(Modal::RegisterClub(form)) => {
                let existing = id_set(&merge(&self.seed.clubs, &self.user_clubs));
                match form.submit(&existing, &mut self.rng) {
                    Ok(club) => {
                        let id = club.id;
                        self.user_clubs.insert(0, club);
                        self.modal = None;
                        Dispatch::dirty(
                            DispatchOutcome::Created {
                                kind: RecordKind::Club,
                                id,
                            },
                            StoreKey::UserClubs,
                        )
                    }
                    Err(e) => Dispatch::clean(DispatchOutcome::Rejected(e)),
                }
            }
            Some(Modal::PostRequest(form)) => {
                let existing = id_set(&merge(&self.seed.requests, &self.user_requests));
                match form.submit(&existing, &mut self.rng) {
                    Ok(request) => {
                        let id = request.id;
                        self.user_requests.insert(0, request);
                        self.modal = None;
                        Dispatch::dirty(
                            DispatchOutcome::Created {
                                kind: RecordKind::Request,
                                id,
                            },
                            StoreKey::UserRequests,
                        )
                    }
                    Err(e) => Dispatch::clean(DispatchOutcome::Rejected(e)),
                }
            }
        }
    }

    /// Derive the current view from scratch.
    pub fn view(&self) -> DirectoryView {
        let results = match self.mode {
            DiscoverMode::Clubs => {
                let clubs = filter_clubs(&self.clubs(), &self.query, &self.selected_tags);
                Results::Clubs(
                    clubs
                        .into_iter()
                        .map(|club| ClubCard {
                            hearted: self.hearted.contains(&club.id),
                            club,
                        })
                        .collect(),
                )
            }
            DiscoverMode::Vendors => {
                Results::Vendors(filter_records(&self.seed.vendors, &self.query))
            }
            DiscoverMode::Requests => {
                Results::Requests(filter_records(&self.requests(), &self.query))
            }
        };

        let hearted = match self.mode {
            DiscoverMode::Clubs => resolve_hearted(&self.hearted, &self.clubs()),
            _ => Vec::new(),
        };

        DirectoryView {
            mode: self.mode,
            query: self.query_text.clone(),
            chips: self.chips(),
            hearted,
            results,
            modal: self.modal.clone(),
        }
    }

    /// Sampled chips first, then any selected tags typed outside the sample.
    fn chips(&self) -> Vec<TagChip> {
        if self.mode != DiscoverMode::Clubs {
            return Vec::new();
        }
        let is_selected = |tag: &str| {
            let wanted = normalize(tag);
            self.selected_tags.iter().any(|t| normalize(t) == wanted)
        };
        let mut chips: Vec<TagChip> = self
            .discover_tags
            .iter()
            .map(|tag| TagChip {
                tag: tag.clone(),
                selected: is_selected(tag),
            })
            .collect();
        for tag in &self.selected_tags {
            let wanted = normalize(tag);
            if !self.discover_tags.iter().any(|t| normalize(t) == wanted) {
                chips.push(TagChip {
                    tag: tag.clone(),
                    selected: true,
                });
            }
        }
        chips
    }
}
