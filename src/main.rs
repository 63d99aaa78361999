use tracing::Level;

fn log_level() -> Level {
    if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO }
}

/// Browser console on wasm32, stdout everywhere else.
#[cfg(target_arch = "wasm32")]
fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::layer::SubscriberExt;

    let layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(log_level())
            .build(),
    );
    tracing::subscriber::set_global_default(tracing_subscriber::registry().with(layer))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(log_level())
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber: {e}"))
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    if let Err(err) = init_logging() {
        // A subscriber is already installed; say so through it.
        tracing::warn!(error = %err, "logging setup skipped");
    }

    yew::Renderer::<sketchpad::App>::new().render();
}
