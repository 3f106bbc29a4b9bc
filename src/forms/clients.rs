use serde::Deserialize;
use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::types::ClientName;
use crate::forms::{FormError, not_blank};

#[derive(Debug, Default, Deserialize, Validate)]
/// Body of `POST /api/clients`.
pub struct ClientForm {
    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
}

impl TryFrom<ClientForm> for NewClient {
    type Error = FormError;

    fn try_from(form: ClientForm) -> Result<Self, Self::Error> {
        form.validate().map_err(|source| FormError::Validation {
            message: "Client name required",
            source,
        })?;

        let name = ClientName::new(form.name.unwrap_or_default())?;
        Ok(NewClient::new(name, form.email, form.company))
    }
}
