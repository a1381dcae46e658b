use diesel::dsl::exists;
use diesel::prelude::*;

use crate::repository::{DieselRepository, EntityKey, EntityReader, errors::RepositoryResult};

impl EntityReader for DieselRepository {
    fn entity_exists(&self, key: EntityKey) -> RepositoryResult<bool> {
        use crate::schema::{client_trip, clients, trips};

        let mut conn = self.conn()?;

        let found: bool = match key {
            EntityKey::Client(id) => {
                diesel::select(exists(clients::table.find(id.get()))).get_result(&mut conn)?
            }
            EntityKey::Trip(id) => {
                diesel::select(exists(trips::table.find(id.get()))).get_result(&mut conn)?
            }
            EntityKey::Registration { client_id, trip_id } => diesel::select(exists(
                client_trip::table.find((client_id.get(), trip_id.get())),
            ))
            .get_result(&mut conn)?,
        };

        Ok(found)
    }
}
