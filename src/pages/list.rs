use crate::db::StudentStore;
use crate::err::RegistryError;
use crate::pages::Notice;
use crate::student::Student;

/// Everything the list page renders: the records plus an optional one-shot
/// notice from a mutation that just redirected here.
#[derive(Debug)]
pub struct ListPage {
    pub students: Vec<Student>,
    pub notice: Option<Notice>,
}

/// Display-only; loads every record in storage order.
pub async fn show(
    store: &StudentStore,
    notice: Option<Notice>,
) -> Result<ListPage, RegistryError> {
    let students = store.list_all().await?;
    Ok(ListPage { students, notice })
}
