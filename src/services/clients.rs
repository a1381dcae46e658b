use crate::domain::client::NewClient;
use crate::domain::types::ClientId;
use crate::forms::client::CreateClientForm;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ConflictKind, ServiceError, ServiceResult};

/// Validates the payload and inserts a client unless its email or pesel is taken.
pub fn create_client<R>(repo: &R, form: CreateClientForm) -> ServiceResult<ClientId>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let new_client = NewClient::try_from(form).map_err(|err| {
        log::debug!("Rejected client payload: {err}");
        ServiceError::from(err)
    })?;

    let taken = repo.client_identity_taken(&new_client).map_err(|err| {
        log::error!("Failed to check client uniqueness: {err}");
        err
    })?;
    if taken {
        log::warn!("Client {} already exists", new_client.email);
        return Err(ServiceError::Conflict(ConflictKind::DuplicateClient));
    }

    match repo.create_client(&new_client) {
        Ok(client) => {
            log::info!("Created client {}", client.id);
            Ok(client.id)
        }
        // Lost a race against a concurrent insert of the same email or pesel.
        Err(err) if err.is_unique_violation() => {
            log::warn!("Client {} already exists: {err}", new_client.email);
            Err(ServiceError::Conflict(ConflictKind::DuplicateClient))
        }
        Err(err) => {
            log::error!("Failed to create client: {err}");
            Err(err.into())
        }
    }
}
