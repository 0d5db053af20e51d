//! Simulation de séquençage shotgun et mesure de l'assemblage

pub mod metrics;
pub mod pipeline;
pub mod sampler;

pub use metrics::{MetricsCollector, RunMetrics};
pub use pipeline::{AssemblyRun, RunConfig, RunOutcome};
pub use sampler::{sample, sample_fragments, SamplerConfig, ShotgunSampler};
