use log::info;

use crate::db::StudentStore;
use crate::err::RegistryError;
use crate::pages::Notice;
use crate::student::Student;

/// Outcome of a delete confirmation.
#[derive(Debug)]
pub enum DeleteResponse {
    /// Record removed; redirect to the list with the notice.
    Deleted(Notice),
    /// The record was already gone; redirect to the list without a notice.
    AlreadyGone,
    /// No id was supplied.
    NotFound,
}

/// Display phase: load the record for the confirmation page. `None` when the
/// id is absent or unknown.
pub async fn show(
    store: &StudentStore,
    id: Option<i64>,
) -> Result<Option<Student>, RegistryError> {
    match id {
        Some(id) => store.get_by_id(id).await,
        None => Ok(None),
    }
}

/// Confirm phase: re-resolve the id, then delete. A repeat submit on the same
/// id redirects quietly instead of failing.
pub async fn submit(
    store: &StudentStore,
    id: Option<i64>,
) -> Result<DeleteResponse, RegistryError> {
    let Some(id) = id else {
        return Ok(DeleteResponse::NotFound);
    };

    match store.get_by_id(id).await? {
        Some(student) => {
            store.delete(id).await?;
            info!(
                "deleted student {} ({})",
                student.id, student.registration_number
            );
            Ok(DeleteResponse::Deleted(Notice::deleted(&student.full_name)))
        }
        None => Ok(DeleteResponse::AlreadyGone),
    }
}
