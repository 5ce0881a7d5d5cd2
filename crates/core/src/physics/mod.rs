//! Physical quantities and ambient conditions

pub mod altitude;
pub mod natural_environment;

pub use altitude::Altitude;
pub use natural_environment::{
    ChangeListener, EnvironmentField, EnvironmentSettings, ListenerId, NaturalEnvironment,
};
