//! Object listing filters and ordering.
//!
//! DESIGN
//! ======
//! Filtering is a pure function of (source list, criteria) so the home grid
//! and "my objects" grid re-derive through a memo and can be unit-tested
//! without a renderer. Nothing is pushed down to the backend.

#[cfg(test)]
#[path = "objects_test.rs"]
mod objects_test;

use crate::net::types::{Object, ObjectCategory, ObjectStatus};

/// Home-page search criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectFilter {
    pub category: Option<ObjectCategory>,
    pub query: String,
}

impl ObjectFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.query.trim().is_empty()
    }

    pub fn matches(&self, object: &Object) -> bool {
        if let Some(category) = &self.category {
            if &object.category != category {
                return false;
            }
        }
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        object.title.to_lowercase().contains(&needle) || object.description.to_lowercase().contains(&needle)
    }
}

/// Objects matching `filter`, in input order.
pub fn filter_objects(objects: &[Object], filter: &ObjectFilter) -> Vec<Object> {
    objects.iter().filter(|o| filter.matches(o)).cloned().collect()
}

/// Order by `created_at`, newest first. Stable for equal timestamps.
pub fn sort_newest_first(objects: &mut [Object]) {
    objects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Status selector on the "my objects" page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Available,
    Traded,
    Unavailable,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [Self::All, Self::Available, Self::Traded, Self::Unavailable];

    /// Value used in the `<select>` element.
    pub fn key(self) -> &'static str {
        match self {
            Self::All => "todos",
            Self::Available => "disponivel",
            Self::Traded => "trocado",
            Self::Unavailable => "indisponivel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todos os status",
            Self::Available => "Disponível",
            Self::Traded => "Trocado",
            Self::Unavailable => "Indisponível",
        }
    }

    /// Unknown keys fall back to `All`.
    pub fn from_key(key: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.key() == key).unwrap_or_default()
    }

    pub fn accepts(self, status: &ObjectStatus) -> bool {
        match self {
            Self::All => true,
            Self::Available => *status == ObjectStatus::Available,
            Self::Traded => *status == ObjectStatus::Traded,
            Self::Unavailable => *status == ObjectStatus::Unavailable,
        }
    }
}

pub fn filter_by_status(objects: &[Object], filter: StatusFilter) -> Vec<Object> {
    objects.iter().filter(|o| filter.accepts(&o.status)).cloned().collect()
}

/// "1 objeto encontrado" / "N objetos encontrados".
pub fn found_label(count: usize) -> String {
    if count == 1 {
        "1 objeto encontrado".to_owned()
    } else {
        format!("{count} objetos encontrados")
    }
}

/// Heading and hint for an empty "my objects" grid. `owned` is the number
/// of objects before the status filter applies.
pub fn empty_message(owned: usize) -> (&'static str, &'static str) {
    if owned == 0 {
        (
            "Você ainda não tem objetos anunciados",
            "Cadastre seus primeiros objetos para começar a fazer trocas.",
        )
    } else {
        ("Nenhum objeto com este status", "Tente selecionar outro status para ver seus objetos.")
    }
}

/// CSS modifier for an object status badge.
pub fn status_badge_modifier(status: &ObjectStatus) -> &'static str {
    match status {
        ObjectStatus::Available => "available",
        ObjectStatus::InNegotiation => "negotiating",
        ObjectStatus::Traded => "traded",
        ObjectStatus::Unavailable | ObjectStatus::Unknown(_) => "muted",
    }
}
