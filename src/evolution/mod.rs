pub mod builder;
pub mod launcher;
pub mod options;
pub mod scheme;

pub use builder::EvolutionLauncherBuilder;
pub use launcher::{EvolutionLauncher, EvolutionResult, GenerationReport};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use scheme::{Generational, Scheme, SteadyState};
