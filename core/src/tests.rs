use chrono::{TimeZone, Utc};
use std::{cell::RefCell, rc::Rc};

use crate::{
    api::{ApiResponse, AuthApi, Registration},
    clock::ManualClock,
    drafts::{DraftBoard, DraftEntry, DraftInput, DraftListing, DraftRepository, Submission},
    error::{Error, Result},
    storage::MemoryStore,
    types::Section,
    Config,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    CurrentUser(String),
    Register(Registration),
}

/// Scripted authentication service that records every request.
#[derive(Clone)]
pub(crate) struct FakeApi {
    reply: std::result::Result<ApiResponse, String>,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl FakeApi {
    pub(crate) fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(ApiResponse {
                status,
                body: body.to_string(),
            }),
            calls: Default::default(),
        }
    }

    pub(crate) fn unreachable() -> Self {
        Self {
            reply: Err("Failed to fetch".to_string()),
            calls: Default::default(),
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn reply(&self, call: Call) -> Result<ApiResponse> {
        self.calls.borrow_mut().push(call);
        self.reply.clone().map_err(Error::Http)
    }
}

impl AuthApi for FakeApi {
    async fn current_user(&self, email: &str) -> Result<ApiResponse> {
        self.reply(Call::CurrentUser(email.to_string()))
    }

    async fn register(&self, registration: &Registration) -> Result<ApiResponse> {
        self.reply(Call::Register(registration.clone()))
    }
}

fn open_board(store: &MemoryStore) -> DraftBoard<MemoryStore, ManualClock> {
    let config = Config::default();
    let clock = ManualClock::at(Utc.with_ymd_and_hms(2026, 10, 19, 9, 5, 0).unwrap());

    DraftBoard::open(DraftRepository::new(store.clone(), config.drafts_key), clock)
        .expect("memory store is writable")
}

fn only_entry(listing: DraftListing) -> DraftEntry {
    match listing {
        DraftListing::Entries(mut entries) if entries.len() == 1 => entries.remove(0),
        other => panic!("expected a single draft, got {other:?}"),
    }
}

#[test]
fn submit_then_render_single_draft() {
    let store = MemoryStore::new();
    let board = open_board(&store);

    let submission = board
        .submit(DraftInput {
            title: "A".into(),
            section: "cultura".into(),
            body: "hello".into(),
        })
        .unwrap();
    assert!(matches!(submission, Submission::Saved(_)));

    let stored: Vec<serde_json::Value> = serde_json::from_str(
        &crate::storage::KeyValueStore::get_item(&store, "lcebolla-news-submissions")
            .unwrap()
            .unwrap(),
    )
    .unwrap();
    assert_eq!(stored.len(), 1);

    let entry = only_entry(board.render(&Utc));
    assert_eq!(entry.label, "Cultura");
    assert_eq!(entry.title, "A");
    assert_eq!(entry.excerpt, "hello");
}

#[test]
fn every_section_renders_its_label() {
    for section in Section::ALL {
        let store = MemoryStore::new();
        let board = open_board(&store);
        let body = "palabra ".repeat(40);

        board
            .submit(DraftInput {
                title: section.label().into(),
                section: section.key().into(),
                body: body.clone(),
            })
            .unwrap();

        let entry = only_entry(board.render(&Utc));
        let trimmed = body.trim();
        assert_eq!(entry.label, section.label());
        assert!(trimmed.chars().count() > 220);
        assert!(entry.excerpt.ends_with('…'));
        assert!(trimmed.starts_with(entry.excerpt.trim_end_matches('…')));
    }
}

#[test]
fn clear_then_render_shows_placeholder() {
    let store = MemoryStore::new();
    let board = open_board(&store);

    board
        .submit(DraftInput {
            title: "A".into(),
            section: "opinion".into(),
            body: "hello".into(),
        })
        .unwrap();
    board.clear(|_| true).unwrap();

    assert!(matches!(board.render(&Utc), DraftListing::Empty { .. }));
}
