//! Shared helpers for integration tests.

#![allow(dead_code)]

use diesel::connection::SimpleConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use travel_agency::db::{DbPool, establish_connection_pool};
use travel_agency::domain::client::NewClient;
use travel_agency::domain::types::{ClientId, TripId};
use travel_agency::repository::{ClientWriter, DieselRepository, TripReader};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Migrated SQLite database living in a temporary directory for one test.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url).expect("create pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    /// Executes raw seed SQL.
    pub fn seed(&self, sql: &str) {
        let mut conn = self.pool.get().expect("get connection");
        conn.batch_execute(sql).expect("seed database");
    }
}

/// Catalog used by most tests.
///
/// Trips (by start date): 1 Alps (cap 2), 2 Lisbon (cap 1), 3 Crete (cap 3, no
/// countries). Alps visits Austria and Switzerland, Lisbon visits Portugal.
pub const CATALOG: &str = "
    INSERT INTO Country (IdCountry, Name) VALUES
        (1, 'Switzerland'), (2, 'Austria'), (3, 'Portugal');
    INSERT INTO Trip (IdTrip, Name, Description, DateFrom, DateTo, MaxPeople) VALUES
        (1, 'Alps', 'Hiking week', '2025-07-01 08:00:00', '2025-07-08 18:00:00', 2),
        (2, 'Lisbon', NULL, '2025-08-01 09:00:00', '2025-08-04 21:00:00', 1),
        (3, 'Crete', 'Beach', '2025-09-10 00:00:00', '2025-09-20 00:00:00', 3);
    INSERT INTO Country_Trip (IdCountry, IdTrip) VALUES (1, 1), (2, 1), (3, 2);
";

pub fn seeded(name: &str) -> TestDb {
    let db = TestDb::new(name);
    db.seed(CATALOG);
    db
}

pub fn new_client(first_name: &str, email: &str, pesel: Option<&str>) -> NewClient {
    NewClient::try_new(
        first_name,
        "Tester",
        email,
        None,
        pesel.map(str::to_string),
    )
    .expect("valid client")
}

pub fn insert_client(repo: &DieselRepository, first_name: &str, email: &str) -> ClientId {
    repo.create_client(&new_client(first_name, email, None))
        .expect("insert client")
        .id
}

pub fn trip(id: i32) -> TripId {
    TripId::new(id).expect("valid trip id")
}

/// Current number of registrations for the trip.
pub fn registered_count(repo: &DieselRepository, trip_id: i32) -> i64 {
    repo.get_trip_occupancy(trip(trip_id))
        .expect("read occupancy")
        .expect("trip exists")
        .registered
}
