mod orgs;
mod projects;
mod users;

pub use orgs::handle as orgs;
pub use projects::handle as projects;
pub use users::handle as users;
