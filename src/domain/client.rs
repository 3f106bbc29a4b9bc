use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, ClientName, TypeConstraintError, optional_text};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub email: Option<String>,
    pub company: Option<String>,
}

impl Client {
    pub fn try_new(
        id: i32,
        name: String,
        email: Option<String>,
        company: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: ClientId::new(id)?,
            name: ClientName::new(name)?,
            email,
            company,
        })
    }
}

#[derive(Clone, Debug)]
pub struct NewClient {
    pub name: ClientName,
    pub email: Option<String>,
    pub company: Option<String>,
}

impl NewClient {
    #[must_use]
    pub fn new(name: ClientName, email: Option<String>, company: Option<String>) -> Self {
        Self {
            name,
            email: optional_text(email),
            company: optional_text(company),
        }
    }
}
