//! Backend row and payload DTOs.
//!
//! DESIGN
//! ======
//! Field names on the wire are the backend's (Portuguese) column names; Rust
//! names are English and mapped with serde renames. Enum columns keep an
//! `Unknown` variant so one unexpected value does not fail a whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` as the type's default instead of failing.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal, $label:literal;)+ }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A value this client does not know about.
            Unknown(String),
        }

        impl $name {
            /// Every known variant, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Column value as stored by the backend.
            pub fn as_wire(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Unknown(raw) => raw.as_str(),
                }
            }

            /// Human-readable label shown in the UI.
            pub fn label(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Unknown(raw) => raw.as_str(),
                }
            }

            /// Parse a wire value; `None` for values outside the known set.
            pub fn parse_known(raw: &str) -> Option<Self> {
                match raw {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::parse_known(&raw).unwrap_or($name::Unknown(raw))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_wire().to_owned()
            }
        }
    };
}

wire_enum! {
    /// Category an object is listed under.
    ObjectCategory {
        Books => "livros", "Livros";
        Electronics => "eletronicos", "Eletrônicos";
        Clothing => "roupas", "Roupas";
        Accessories => "acessorios", "Acessórios";
        Furniture => "moveis", "Móveis";
        Other => "outros", "Outros";
    }
}

wire_enum! {
    /// Listing status of an object.
    ObjectStatus {
        Available => "disponivel", "Disponível";
        InNegotiation => "em_negociacao", "Em Negociação";
        Traded => "trocado", "Trocado";
        Unavailable => "indisponivel", "Indisponível";
    }
}

wire_enum! {
    /// Lifecycle status of a trade proposal.
    TradeStatus {
        Pending => "pendente", "Pendente";
        Accepted => "aceita", "Aceita";
        Declined => "recusada", "Recusada";
        Cancelled => "cancelada", "Cancelada";
        Completed => "concluida", "Concluída";
    }
}

impl Default for ObjectStatus {
    fn default() -> Self {
        Self::Available
    }
}

impl ObjectStatus {
    /// Statuses an owner may pick on the edit form.
    pub const EDITABLE: &'static [ObjectStatus] =
        &[ObjectStatus::Available, ObjectStatus::InNegotiation, ObjectStatus::Traded];
}

impl TradeStatus {
    /// Terminal statuses never change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Declined | Self::Cancelled | Self::Completed)
    }
}

/// A user's public identity record (`profiles` table).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(rename = "nome_completo", default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "curso", default)]
    pub course: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A listed item (`objects` table), optionally joined with its owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default, deserialize_with = "null_to_default")]
    pub description: String,
    #[serde(rename = "categoria")]
    pub category: ObjectCategory,
    #[serde(rename = "condicao", default, deserialize_with = "null_to_default")]
    pub condition: String,
    #[serde(default)]
    pub status: ObjectStatus,
    #[serde(rename = "imagens", default, deserialize_with = "null_to_default")]
    pub images: Vec<String>,
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Profile>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Object {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Object columns embedded in a trade row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeObject {
    pub id: String,
    #[serde(rename = "titulo", default, deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(rename = "categoria", default)]
    pub category: Option<ObjectCategory>,
    #[serde(rename = "imagens", default, deserialize_with = "null_to_default")]
    pub images: Vec<String>,
}

impl TradeObject {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A trade proposal (`trades` table) with embedded parties and objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    #[serde(rename = "proponente_id")]
    pub proposer_id: String,
    #[serde(rename = "receptor_id")]
    pub recipient_id: String,
    #[serde(rename = "objeto_oferecido_id")]
    pub offered_object_id: String,
    #[serde(rename = "objeto_desejado_id")]
    pub desired_object_id: String,
    pub status: TradeStatus,
    #[serde(rename = "mensagem", default)]
    pub message: Option<String>,
    #[serde(default)]
    pub location_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "proponente", default)]
    pub proposer: Option<Profile>,
    #[serde(rename = "receptor", default)]
    pub recipient: Option<Profile>,
    #[serde(rename = "objeto_oferecido", default)]
    pub offered_object: Option<TradeObject>,
    #[serde(rename = "objeto_desejado", default)]
    pub desired_object: Option<TradeObject>,
}

impl Trade {
    /// Most recent activity: `updated_at` when present, else `created_at`.
    pub fn activity_at(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

/// The authenticated account behind a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Token grant returned by the auth API.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

/// Persisted auth session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Expiry as Unix seconds.
    pub expires_at: i64,
    pub user: AuthUser,
}

impl Session {
    /// Build a session from a token grant, resolving relative expiry against `now_secs`.
    pub fn from_token_response(resp: TokenResponse, now_secs: i64) -> Self {
        let expires_at = resp
            .expires_at
            .unwrap_or_else(|| now_secs + resp.expires_in.unwrap_or(3600));
        Self {
            access_token: resp.access_token,
            refresh_token: resp.refresh_token,
            expires_at,
            user: resp.user,
        }
    }

    /// True when the access token expires within `margin_secs` of `now_secs`.
    pub fn is_expired(&self, now_secs: i64, margin_secs: i64) -> bool {
        self.expires_at - margin_secs <= now_secs
    }
}

/// Editable object columns, used for insert and update.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectDraft {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "categoria")]
    pub category: ObjectCategory,
    #[serde(rename = "condicao")]
    pub condition: String,
    pub status: ObjectStatus,
    #[serde(rename = "imagens")]
    pub images: Vec<String>,
}

/// Insert payload for a new object.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewObject {
    #[serde(flatten)]
    pub draft: ObjectDraft,
    pub owner_id: String,
}

/// Patch payload for an existing object.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectUpdate {
    #[serde(flatten)]
    pub draft: ObjectDraft,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a trade proposal.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTrade {
    #[serde(rename = "proponente_id")]
    pub proposer_id: String,
    #[serde(rename = "receptor_id")]
    pub recipient_id: String,
    #[serde(rename = "objeto_oferecido_id")]
    pub offered_object_id: String,
    #[serde(rename = "objeto_desejado_id")]
    pub desired_object_id: String,
    pub status: TradeStatus,
    #[serde(rename = "mensagem", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Patch payload for a trade status change.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TradeStatusUpdate {
    pub status: TradeStatus,
    pub updated_at: DateTime<Utc>,
}
