use diesel::prelude::*;

use crate::{
    domain::client::{Client, NewClient},
    models::client::{Client as DbClient, NewClient as DbNewClient},
    repository::{ClientReader, ClientWriter, DieselRepository, errors::RepositoryResult},
};

impl ClientReader for DieselRepository {
    fn client_identity_taken(&self, candidate: &NewClient) -> RepositoryResult<bool> {
        use crate::schema::clients;

        let mut conn = self.conn()?;

        // `Email` is declared `COLLATE NOCASE`, so this match ignores case.
        let mut query = clients::table
            .filter(clients::email.eq(candidate.email.as_str()))
            .select(clients::id_client)
            .into_boxed();
        if let Some(pesel) = &candidate.pesel {
            query = query.or_filter(clients::pesel.eq(pesel.as_str()));
        }

        let existing = query.first::<i32>(&mut conn).optional()?;
        Ok(existing.is_some())
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let insertable: DbNewClient = new_client.into();

        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .returning(DbClient::as_returning())
            .get_result(&mut conn)?;

        Ok(Client::try_from(created)?)
    }
}
