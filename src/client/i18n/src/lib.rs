/* src/client/i18n/src/lib.rs */

pub mod bundle;
pub mod errors;
pub mod interpolate;
pub mod provider;
pub mod registry;
pub mod translator;

// Re-exports for ergonomic use
pub use bundle::LocaleBundle;
pub use errors::LocaleError;
pub use interpolate::interpolate;
pub use provider::LocaleProvider;
pub use registry::{DEFAULT_LOCALE, LocaleRegistry, SUPPORTED_LOCALES};
pub use translator::Translator;
