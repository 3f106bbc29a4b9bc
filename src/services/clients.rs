use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::forms::clients::ClientForm;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns every client in insertion order.
pub fn list_clients<R>(repo: &R) -> ServiceResult<Vec<Client>>
where
    R: ClientReader + ?Sized,
{
    repo.list_clients().map_err(|err| {
        log::error!("Failed to list clients: {err}");
        err.into()
    })
}

/// Validates the payload and persists a new client.
pub fn create_client<R>(repo: &R, form: ClientForm) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let new_client = NewClient::try_from(form)?;

    repo.create_client(&new_client).map_err(|err| {
        log::error!("Failed to add a client: {err}");
        err.into()
    })
}

/// Deletes a client. Missing rows are not reported.
pub fn delete_client<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    let Ok(id) = ClientId::new(id) else {
        return Ok(());
    };

    let affected = repo.delete_client(id).map_err(|err| {
        log::error!("Failed to delete client {id}: {err}");
        ServiceError::from(err)
    })?;
    if affected == 0 {
        log::debug!("Client {id} was already absent");
    }
    Ok(())
}
