// Hand-maintained: the SQL schema keeps the PascalCase table and column names
// of the legacy database, mapped onto snake_case identifiers.

diesel::table! {
    #[sql_name = "Client"]
    clients (id_client) {
        #[sql_name = "IdClient"]
        id_client -> Integer,
        #[sql_name = "FirstName"]
        first_name -> Text,
        #[sql_name = "LastName"]
        last_name -> Text,
        #[sql_name = "Email"]
        email -> Text,
        #[sql_name = "Telephone"]
        telephone -> Nullable<Text>,
        #[sql_name = "Pesel"]
        pesel -> Nullable<Text>,
    }
}

diesel::table! {
    #[sql_name = "Trip"]
    trips (id_trip) {
        #[sql_name = "IdTrip"]
        id_trip -> Integer,
        #[sql_name = "Name"]
        name -> Text,
        #[sql_name = "Description"]
        description -> Nullable<Text>,
        #[sql_name = "DateFrom"]
        date_from -> Timestamp,
        #[sql_name = "DateTo"]
        date_to -> Timestamp,
        #[sql_name = "MaxPeople"]
        max_people -> Integer,
    }
}

diesel::table! {
    #[sql_name = "Country"]
    countries (id_country) {
        #[sql_name = "IdCountry"]
        id_country -> Integer,
        #[sql_name = "Name"]
        name -> Text,
    }
}

diesel::table! {
    #[sql_name = "Country_Trip"]
    country_trip (id_country, id_trip) {
        #[sql_name = "IdCountry"]
        id_country -> Integer,
        #[sql_name = "IdTrip"]
        id_trip -> Integer,
    }
}

diesel::table! {
    #[sql_name = "Client_Trip"]
    client_trip (id_client, id_trip) {
        #[sql_name = "IdClient"]
        id_client -> Integer,
        #[sql_name = "IdTrip"]
        id_trip -> Integer,
        #[sql_name = "RegisteredAt"]
        registered_at -> Integer,
        #[sql_name = "PaymentDate"]
        payment_date -> Nullable<Integer>,
    }
}

diesel::joinable!(client_trip -> clients (id_client));
diesel::joinable!(client_trip -> trips (id_trip));
diesel::joinable!(country_trip -> countries (id_country));
diesel::joinable!(country_trip -> trips (id_trip));

diesel::allow_tables_to_appear_in_same_query!(
    client_trip,
    clients,
    countries,
    country_trip,
    trips,
);
