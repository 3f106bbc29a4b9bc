use diesel::prelude::*;

use crate::domain::client::{Client as DomainClient, NewClient as DomainNewClient};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub company: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub company: Option<&'a str>,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        DomainClient::try_new(client.id, client.name, client.email, client.company)
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            name: client.name.as_str(),
            email: client.email.as_deref(),
            company: client.company.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ClientName;

    #[test]
    fn from_domain_new_creates_newclient() {
        let domain = DomainNewClient::new(
            ClientName::new("Globex").unwrap(),
            Some(" ops@globex.com ".to_string()),
            Some("".to_string()),
        );
        let new: NewClient = (&domain).into();
        assert_eq!(new.name, "Globex");
        assert_eq!(new.email, Some("ops@globex.com"));
        assert_eq!(new.company, None);
    }

    #[test]
    fn client_into_domain() {
        let db_client = Client {
            id: 3,
            name: "Initech".to_string(),
            email: None,
            company: Some("Initech LLC".to_string()),
        };
        let domain = DomainClient::try_from(db_client).unwrap();
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.name.as_str(), "Initech");
        assert_eq!(domain.email, None);
        assert_eq!(domain.company.as_deref(), Some("Initech LLC"));
    }
}
