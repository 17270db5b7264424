// Library surface shared by the binary and the headless/integration tests.
pub mod app;
pub mod app_dirs;
pub mod band;
pub mod config;
pub mod form;
pub mod logging;
pub mod momentum;
pub mod plan;
pub mod runtime;
pub mod session;
pub mod task;
pub mod ui;

pub use app::{App, Flow};
pub use form::{InputForm, InputRecord, ValidationError, ValidationErrors};
pub use momentum::{calculate, DerivedMetrics};
pub use plan::PlanPresenter;
pub use session::{Mode, Session};
