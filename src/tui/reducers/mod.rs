pub mod data_loading;
pub mod picker;
pub mod roster;
pub mod search;
pub mod selection;

pub use data_loading::reduce_data_loading;
pub use picker::reduce_picker;
pub use roster::reduce_roster;
pub use search::reduce_search;
pub use selection::{reduce_selection, sync_selection};
