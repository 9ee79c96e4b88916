//! Local news drafts: a repository over the key/value store and the board
//! controller that validates, stores, clears and lists them.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use log::{info, warn};
use uuid::Uuid;

use crate::{
    clock::Clock,
    error::{Error, Result},
    locale::timestamp_in,
    storage::KeyValueStore,
    types::{section_label, Draft, Status},
};

/// excerpts longer than this many characters are cut and marked with `…`
pub const EXCERPT_LIMIT: usize = 220;

pub const STORAGE_DISABLED: &str =
    "El almacenamiento local está desactivado. No es posible guardar borradores en este navegador.";
pub const MISSING_FIELDS: &str = "Revisa que el título, la sección y el texto estén completos.";
pub const SAVED: &str = "La propuesta se guardó como borrador local.";
pub const NOTHING_TO_CLEAR: &str = "No hay borradores para eliminar.";
pub const CONFIRM_CLEAR: &str = "¿Seguro que quieres borrar todos los borradores guardados?";
pub const CLEARED: &str = "Los borradores se eliminaron del almacenamiento local.";
pub const EMPTY_PLACEHOLDER: &str = "Todavía no guardaste borradores.";

pub struct DraftRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> DraftRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.store.is_writable(&self.key)
    }

    /// Stored drafts in insertion order. Anything unreadable counts as empty.
    pub fn load(&self) -> Vec<Draft> {
        let stored = match self.store.get_item(&self.key) {
            Ok(Some(stored)) if !stored.is_empty() => stored,
            Ok(_) => return Vec::new(),
            Err(e) => {
                warn!("could not read drafts: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Draft>>(&stored) {
            Ok(drafts) => drafts,
            Err(e) => {
                warn!("ignoring unreadable draft list: {e}");
                Vec::new()
            }
        }
    }

    /// append a draft, returns the number of stored drafts
    pub fn append(&self, draft: Draft) -> Result<usize> {
        let mut drafts = self.load();
        drafts.push(draft);
        self.store
            .set_item(&self.key, &serde_json::to_string(&drafts)?)?;

        Ok(drafts.len())
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove_item(&self.key)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftInput {
    pub title: String,
    pub section: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Saved(Status),
    Rejected(Status),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftEntry {
    pub id: String,
    pub label: &'static str,
    pub title: String,
    pub excerpt: String,
    pub saved_on: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftListing {
    Empty { placeholder: &'static str },
    Entries(Vec<DraftEntry>),
}

pub struct DraftBoard<S, C> {
    repository: DraftRepository<S>,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> DraftBoard<S, C> {
    /// Fails with [`Error::StorageUnavailable`] when the store cannot be written.
    pub fn open(repository: DraftRepository<S>, clock: C) -> Result<Self> {
        if !repository.is_available() {
            return Err(Error::StorageUnavailable);
        }

        Ok(Self { repository, clock })
    }

    pub fn repository(&self) -> &DraftRepository<S> {
        &self.repository
    }

    pub fn submit(&self, input: DraftInput) -> Result<Submission> {
        let title = input.title.trim();
        let body = input.body.trim();

        if title.is_empty() || input.section.is_empty() || body.is_empty() {
            return Ok(Submission::Rejected(Status::error(MISSING_FIELDS)));
        }

        let draft = Draft {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            section: input.section,
            body: body.to_string(),
            created_at: self
                .clock
                .now()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let id = draft.id.clone();
        let count = self.repository.append(draft)?;
        info!("stored draft {id} ({count} in total)");

        Ok(Submission::Saved(Status::success(SAVED)))
    }

    /// Erase every draft once `confirm` agrees. `None` means nothing changed
    /// and the status should stay as it is.
    pub fn clear(&self, confirm: impl FnOnce(&str) -> bool) -> Result<Option<Status>> {
        if self.repository.load().is_empty() {
            return Ok(Some(Status::neutral(NOTHING_TO_CLEAR)));
        }

        if !confirm(CONFIRM_CLEAR) {
            return Ok(None);
        }

        self.repository.clear()?;
        info!("drafts cleared");

        Ok(Some(Status::success(CLEARED)))
    }

    /// newest first, dates rendered in `tz`
    pub fn render<Tz: TimeZone>(&self, tz: &Tz) -> DraftListing {
        let mut drafts = self.repository.load();

        if drafts.is_empty() {
            return DraftListing::Empty {
                placeholder: EMPTY_PLACEHOLDER,
            };
        }

        drafts.sort_by_key(|draft| std::cmp::Reverse(created_at(draft)));

        DraftListing::Entries(
            drafts
                .into_iter()
                .map(|draft| DraftEntry {
                    label: section_label(&draft.section),
                    excerpt: excerpt(&draft.body),
                    saved_on: format!("Guardado el {}", timestamp_in(&draft.created_at, tz)),
                    id: draft.id,
                    title: draft.title,
                })
                .collect(),
        )
    }
}

// unparseable timestamps sort last
fn created_at(draft: &Draft) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&draft.created_at)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

/// Trim, collapse whitespace runs and cap at [`EXCERPT_LIMIT`] characters.
pub fn excerpt(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    match collapsed.char_indices().nth(EXCERPT_LIMIT) {
        Some((cut, _)) => format!("{}…", &collapsed[..cut]),
        None => collapsed,
    }
}
