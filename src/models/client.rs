use diesel::prelude::*;

use crate::domain::client::{Client as DomainClient, NewClient as DomainNewClient};
use crate::domain::types::{
    ClientEmail, ClientId, FirstName, LastName, Pesel, Telephone, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(primary_key(id_client))]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id_client: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: Option<String>,
    pub pesel: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub telephone: Option<&'a str>,
    pub pesel: Option<&'a str>,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientId::try_from(client.id_client)?,
            first_name: FirstName::new(client.first_name)?,
            last_name: LastName::new(client.last_name)?,
            email: ClientEmail::new(client.email)?,
            telephone: client.telephone.map(Telephone::new).transpose()?,
            pesel: client.pesel.map(Pesel::new).transpose()?,
        })
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            first_name: client.first_name.as_str(),
            last_name: client.last_name.as_str(),
            email: client.email.as_str(),
            telephone: client.telephone.as_deref(),
            pesel: client.pesel.as_deref(),
        }
    }
}
