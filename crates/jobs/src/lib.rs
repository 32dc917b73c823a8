pub mod binding_sweep;
pub mod list_resync;
pub mod runner;

pub use binding_sweep::BindingSweepJob;
pub use list_resync::ListResyncJob;
pub use runner::JobRunner;
