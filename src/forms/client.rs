use serde::Deserialize;
use validator::Validate;

use crate::domain::client::NewClient;
use crate::domain::types::{ClientEmail, FirstName, LastName, Pesel, Telephone};
use crate::forms::FormError;

/// JSON body of `POST /api/clients`.
///
/// Field names are camelCase; the PascalCase spelling of the legacy API is
/// accepted as well.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientForm {
    #[serde(alias = "FirstName")]
    #[validate(length(min = 1, max = 120))]
    pub first_name: String,
    #[serde(alias = "LastName")]
    #[validate(length(min = 1, max = 120))]
    pub last_name: String,
    #[serde(alias = "Email")]
    #[validate(email, length(max = 120))]
    pub email: String,
    #[serde(default, alias = "Telephone")]
    #[validate(length(max = 120))]
    pub telephone: Option<String>,
    #[serde(default, alias = "Pesel")]
    #[validate(length(max = 120))]
    pub pesel: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl TryFrom<CreateClientForm> for NewClient {
    type Error = FormError;

    fn try_from(form: CreateClientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let telephone = non_blank(form.telephone)
            .map(Telephone::new)
            .transpose()
            .map_err(FormError::InvalidTelephone)?;
        let pesel = non_blank(form.pesel)
            .map(Pesel::new)
            .transpose()
            .map_err(FormError::InvalidPesel)?;

        Ok(NewClient::new(
            FirstName::new(form.first_name).map_err(FormError::InvalidName)?,
            LastName::new(form.last_name).map_err(FormError::InvalidName)?,
            ClientEmail::new(form.email).map_err(|_| FormError::InvalidEmail)?,
            telephone,
            pesel,
        ))
    }
}
