//! Système de logging pour l'assembleur

use tracing_subscriber::{fmt, EnvFilter};

/// Niveau par défaut selon le nombre de `-v`
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialise le système de logging
///
/// `RUST_LOG` est prioritaire ; sinon le niveau découle de `verbosity`.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // Un second appel (tests, bancs d'essai) ne doit pas paniquer
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Macro pour le logging des opérations critiques, avec leur durée
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = tracing::span!(tracing::Level::INFO, $name);
        let _enter = span.enter();
        let started = std::time::Instant::now();
        tracing::info!("Début de l'opération: {}", $name);
        let result = $block;
        tracing::info!(
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Fin de l'opération: {}",
            $name
        );
        result
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "trace");
    }

    #[test]
    fn test_log_operation_returns_block_value() {
        let value = crate::log_operation!("calcul", { 40 + 2 });
        assert_eq!(value, 42);
    }
}
