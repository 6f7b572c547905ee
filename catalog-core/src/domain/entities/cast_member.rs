use catalog_model::{CastMemberID, CastMemberType};
use chrono::{DateTime, Utc};

use crate::domain::validation::DomainValidation;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct CastMember {
    id: CastMemberID,
    name: String,
    kind: CastMemberType,
    created_at: DateTime<Utc>,
}

impl CastMember {
    pub fn new(name: impl Into<String>, kind: CastMemberType) -> Result<Self> {
        Self::restore(CastMemberID::new(), name, kind, Utc::now())
    }

    pub fn restore(
        id: CastMemberID,
        name: impl Into<String>,
        kind: CastMemberType,
        created_at: DateTime<Utc>,
    ) -> Result<Self> {
        let name = name.into();
        DomainValidation::name(&name)?;
        Ok(Self {
            id,
            name,
            kind,
            created_at,
        })
    }

    pub fn id(&self) -> CastMemberID {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CastMemberType {
        self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn created_at_formatted(&self) -> String {
        super::format_created_at(self.created_at)
    }

    pub fn update(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        DomainValidation::name(&name)?;
        self.name = name;
        Ok(())
    }
}
