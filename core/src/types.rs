use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Label shown for drafts whose section key is not one of the known sections.
pub const UNKNOWN_SECTION_LABEL: &str = "Sección sin definir";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    UltimaHora,
    Tendencias,
    Politica,
    Economia,
    Cultura,
    Deportes,
    Tecnologia,
    Opinion,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::UltimaHora,
        Section::Tendencias,
        Section::Politica,
        Section::Economia,
        Section::Cultura,
        Section::Deportes,
        Section::Tecnologia,
        Section::Opinion,
    ];

    /// key as submitted by the section select and stored in the draft list
    pub fn key(&self) -> &'static str {
        match self {
            Section::UltimaHora => "ultima-hora",
            Section::Tendencias => "tendencias",
            Section::Politica => "politica",
            Section::Economia => "economia",
            Section::Cultura => "cultura",
            Section::Deportes => "deportes",
            Section::Tecnologia => "tecnologia",
            Section::Opinion => "opinion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::UltimaHora => "Última Hora",
            Section::Tendencias => "Tendencias",
            Section::Politica => "Política",
            Section::Economia => "Economía",
            Section::Cultura => "Cultura",
            Section::Deportes => "Deportes",
            Section::Tecnologia => "Tecnología",
            Section::Opinion => "Opinión",
        }
    }

    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.key() == key)
    }
}

/// label for a stored section key, falling back to [`UNKNOWN_SECTION_LABEL`]
pub fn section_label(key: &str) -> &'static str {
    Section::from_key(key).map_or(UNKNOWN_SECTION_LABEL, |section| section.label())
}

/// A news submission kept in local storage until it is cleared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: String,
    pub title: String,
    pub section: String,
    pub body: String,
    pub created_at: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Neutral,
    Error,
    Success,
}

impl StatusKind {
    pub fn class(&self) -> Option<&'static str> {
        match self {
            StatusKind::Neutral => None,
            StatusKind::Error => Some("form-status-error"),
            StatusKind::Success => Some("form-status-success"),
        }
    }
}

/// Text shown in a form's status region. An empty message hides the region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn neutral(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Neutral,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.message.is_empty()
    }
}

/// Navigation to perform once `after` has elapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub target: String,
    pub after: Duration,
}

impl Redirect {
    pub fn new(target: impl Into<String>, after: Duration) -> Self {
        Self {
            target: target.into(),
            after,
        }
    }
}

/// Result of a form submission that talks to the authentication API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOutcome {
    pub status: Status,
    pub redirect: Option<Redirect>,
}

impl FormOutcome {
    pub fn failed(status: Status) -> Self {
        Self {
            status,
            redirect: None,
        }
    }

    pub fn succeeded(status: Status, redirect: Redirect) -> Self {
        Self {
            status,
            redirect: Some(redirect),
        }
    }

    pub fn is_success(&self) -> bool {
        self.redirect.is_some()
    }
}

/// State of a submit button: disabled and relabelled while a request runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    idle_label: &'static str,
    busy_label: &'static str,
    busy: bool,
}

impl SubmitControl {
    pub const fn new(idle_label: &'static str, busy_label: &'static str) -> Self {
        Self {
            idle_label,
            busy_label,
            busy: false,
        }
    }

    pub fn begin(&mut self) {
        self.busy = true;
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn disabled(&self) -> bool {
        self.busy
    }

    pub fn label(&self) -> &'static str {
        if self.busy {
            self.busy_label
        } else {
            self.idle_label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_keys_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
    }

    #[test]
    fn unknown_section_label() {
        assert_eq!(section_label("cultura"), "Cultura");
        assert_eq!(section_label("ultima-hora"), "Última Hora");
        assert_eq!(section_label("horoscopo"), UNKNOWN_SECTION_LABEL);
        assert_eq!(section_label(""), UNKNOWN_SECTION_LABEL);
    }

    #[test]
    fn draft_uses_camel_case_keys() {
        let draft = Draft {
            id: "1".into(),
            title: "A".into(),
            section: "cultura".into(),
            body: "hello".into(),
            created_at: "2026-10-19T09:05:00.000Z".into(),
        };
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["createdAt"], "2026-10-19T09:05:00.000Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn submit_control_restores_label() {
        let mut control = SubmitControl::new("Enviar", "Enviando…");
        assert!(!control.disabled());
        assert_eq!(control.label(), "Enviar");

        control.begin();
        assert!(control.disabled());
        assert_eq!(control.label(), "Enviando…");

        control.finish();
        assert!(!control.disabled());
        assert_eq!(control.label(), "Enviar");
    }

    #[test]
    fn empty_status_is_hidden() {
        assert!(Status::default().is_hidden());
        assert!(!Status::neutral("x").is_hidden());
        assert_eq!(Status::error("x").kind.class(), Some("form-status-error"));
        assert_eq!(Status::neutral("x").kind.class(), None);
    }
}
