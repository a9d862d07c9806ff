//! Student registry backend: the data entity, a SQLite-backed persistence
//! gateway, declarative field validation, and the four page handlers (list,
//! create, edit, delete). HTTP routing and HTML rendering are left to the
//! embedding application; handlers take form values and return explicit
//! response values.

mod db;
mod err;
pub mod pages;
mod student;
mod validate;

pub use db::StudentStore;
pub use err::RegistryError;
pub use pages::{Notice, DUPLICATE_REGISTRATION_MESSAGE};
pub use student::{Student, StudentForm};
pub use validate::{field, validate, FieldErrors};

/// Installs a terminal logger for embedding applications that don't bring
/// their own. Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
