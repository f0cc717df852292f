//! Operation catalog
//!
//! A declarative table of the operations the CLI can run, each with typed
//! parameters and their defaults. The same table drives `list`, `run` and
//! the interactive navigator.
//!
//! - [`OPERATIONS`] - the table, grouped by [`Section`]
//! - [`OperationSpec::resolve_args`] - parse and default named arguments
//! - [`Dispatcher`] - execute a resolved operation
//! - [`Navigator`] - prompt-by-prompt selection and argument entry

mod dispatch;
mod navigator;
mod registry;
mod types;

pub use dispatch::{split_repo, Dispatcher};
pub use navigator::{Action, Navigator, Screen};
pub use registry::{find, in_section, OPERATIONS};
pub use types::{
    ArgValue, Args, OperationKind, OperationSpec, ParamDefault, ParamKind, ParamSpec, Section,
};
