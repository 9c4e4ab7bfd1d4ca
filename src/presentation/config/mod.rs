mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LoggingSettings, PortalSettings, ServerSettings, Settings, SettingsError, SimulatorSettings,
};
