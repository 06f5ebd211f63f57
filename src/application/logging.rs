use tracing::dispatcher;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Initialise le logging de la bibliothèque :
/// - journald si présent (feature `journald` + socket systemd)
/// - sinon fallback sur stderr (fmt)
///
/// Sans effet si un subscriber global est déjà en place (l'outil appelant
/// garde la main sur sa propre configuration).
pub fn init_logging() {
    if dispatcher::has_been_set() {
        return;
    }

    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    #[cfg(feature = "journald")]
    if std::path::Path::new("/run/systemd/journal/socket").exists() {
        if let Ok(layer) = tracing_journald::layer() {
            if tracing_subscriber::registry()
                .with(filter.clone())
                .with(layer)
                .try_init()
                .is_ok()
            {
                return;
            }
        }
    }

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
