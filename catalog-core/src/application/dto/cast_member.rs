use catalog_model::CastMemberType;
use serde::{Deserialize, Serialize};

use crate::domain::CastMember;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCastMemberInput {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CastMemberType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCastMemberInput {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastMemberOutput {
    pub id: String,
    pub name: String,
    /// Numeric role code (1 = director, 2 = actor).
    #[serde(rename = "type")]
    pub kind: i16,
    pub created_at: String,
}

impl From<&CastMember> for CastMemberOutput {
    fn from(cast_member: &CastMember) -> Self {
        Self {
            id: cast_member.id().to_string(),
            name: cast_member.name().to_owned(),
            kind: cast_member.kind().code(),
            created_at: cast_member.created_at_formatted(),
        }
    }
}

impl From<CastMember> for CastMemberOutput {
    fn from(cast_member: CastMember) -> Self {
        Self::from(&cast_member)
    }
}
