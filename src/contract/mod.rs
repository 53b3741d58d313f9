//! Contract records and CSV batch input/output

mod data;
pub mod loader;

pub use data::{ContractRecord, TerminationRow};
pub use loader::{load_contracts, load_contracts_from_reader, write_rows};
