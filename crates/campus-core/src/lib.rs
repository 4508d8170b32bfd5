pub mod actions;
pub mod charts;
pub mod collection;
pub mod config;
pub mod forms;
pub mod model;
pub mod navigation;
pub mod reducer;
pub mod seed;
pub mod state;

pub use actions::*;
pub use reducer::*;
pub use state::*;

pub use collection::Collection;
pub use config::Config;
pub use model::*;
pub use navigation::role_profile;
pub use navigation::Role;
pub use navigation::RoleProfile;
pub use navigation::Screen;
