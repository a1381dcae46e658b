use crate::domain::trip::TripWithCountries;
use crate::repository::TripReader;
use crate::services::ServiceResult;

/// Returns the whole trip catalog, each trip with its countries.
pub fn list_trips<R>(repo: &R) -> ServiceResult<Vec<TripWithCountries>>
where
    R: TripReader + ?Sized,
{
    let trips = repo.list_trips_with_countries().map_err(|err| {
        log::error!("Failed to list trips: {err}");
        err
    })?;

    Ok(trips)
}
