use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ClientEmail, ClientId, FirstName, LastName, Pesel, Telephone, TypeConstraintError,
};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: ClientEmail,
    pub telephone: Option<Telephone>,
    pub pesel: Option<Pesel>,
}

/// Validated payload for inserting a client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewClient {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: ClientEmail,
    pub telephone: Option<Telephone>,
    pub pesel: Option<Pesel>,
}

impl NewClient {
    #[must_use]
    pub fn new(
        first_name: FirstName,
        last_name: LastName,
        email: ClientEmail,
        telephone: Option<Telephone>,
        pesel: Option<Pesel>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            telephone,
            pesel,
        }
    }

    /// Builds a client from raw input; blank optional values are treated as absent.
    pub fn try_new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        telephone: Option<String>,
        pesel: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        let telephone = telephone
            .filter(|s| !s.trim().is_empty())
            .map(Telephone::new)
            .transpose()?;
        let pesel = pesel
            .filter(|s| !s.trim().is_empty())
            .map(Pesel::new)
            .transpose()?;

        Ok(Self::new(
            FirstName::new(first_name)?,
            LastName::new(last_name)?,
            ClientEmail::new(email)?,
            telephone,
            pesel,
        ))
    }
}
