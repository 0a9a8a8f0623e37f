pub mod error;
pub mod flow_error;
pub mod flows;
pub mod view_model;

pub use error::{AppError, Result};
pub use flow_error::{FlowError, FlowResult};
pub use flows::account_flows::AccountFlows;
pub use flows::contact_editor::ContactEditor;
pub use flows::launch_outcome::LaunchOutcome;
pub use view_model::address_view_model::AddressViewModel;
pub use view_model::contact_list_state::ContactListState;
pub use view_model::list_view::ListView;
