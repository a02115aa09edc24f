pub mod checks;
pub mod init;
pub mod inspect;

pub use checks::{format_checks, run_checks, run_checks_impl};
pub use init::{generate_overrides_template, run_init, run_init_impl};
pub use inspect::{load_overrides, run_inspect, run_inspect_impl};
