mod app_context;

pub use app_context::{AppContext, api_client, open_session};
