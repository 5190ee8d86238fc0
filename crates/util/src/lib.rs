//! Host-side helpers for Palette Studio: user preferences and the JSON file exporter.

pub mod file_export;
pub mod path_processing;
pub mod preferences;

pub use file_export::{ExportError, ExportTarget, JsonFileExporter};
pub use path_processing::expand_tilde;
pub use preferences::{PREFERENCES_FILE_NAME, PREFERENCES_PATH_ENV, PreferencesError, PreferencesPayload, UserPreferences};
