// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::time::Duration;
use toastline::config::{self, Config};
use toastline::notifications::{
    spawn_ticker, Notifier, PromiseMessages, Toast, ToastAction, ToastFeed, ToastOptions,
    ToastStore, Variant,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(toasts: &[Toast]) {
    println!("--- {} toast(s)", toasts.len());
    for toast in toasts {
        let marker = match (toast.is_open(), toast.variant()) {
            (false, _) => "~",
            (true, Variant::Destructive) => "!",
            (true, Variant::Default) => "*",
        };
        let title = toast.title().unwrap_or_default();
        match toast.description() {
            Some(description) => println!("{marker} [{}] {title}: {description}", toast.id()),
            None => println!("{marker} [{}] {title}", toast.id()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toastline=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = pico_args::Arguments::from_env();
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let max_visible: Option<usize> = args.opt_value_from_str("--max-visible")?;

    let mut config: Config = match config_path {
        Some(path) => config::load_from_path(&path)?,
        None => config::load()?,
    };
    if max_visible.is_some() {
        config.max_visible = max_visible;
    }
    tracing::info!(?config, "configuration loaded");

    let store = ToastStore::new(&config);
    let ticker = spawn_ticker(&store, config.tick_interval());
    let notify = Notifier::new(store.clone());

    let mut feed = ToastFeed::attach(&store);
    render(&feed.toasts());
    let renderer = tokio::spawn(async move {
        while let Some(toasts) = feed.changed().await {
            render(&toasts);
        }
    });

    notify.success(
        "Prescription saved",
        ToastOptions::default()
            .with_description("Amoxicillin 500mg added to your schedule")
            .with_action(ToastAction::new("Undo", "prescription.undo")),
    );
    notify.warning(
        "Refill soon",
        ToastOptions::default().with_description("3 doses left"),
    );
    let failed = notify.error("Upload failed", ToastOptions::default());

    let scanned = notify
        .promise(
            async {
                tokio::time::sleep(Duration::from_millis(800)).await;
                Ok::<_, std::io::Error>(2)
            },
            PromiseMessages::new(
                "Reading label",
                "Label scanned",
                "Could not read label",
            ),
        )
        .await?;
    tracing::info!(medications = scanned, "label scan finished");

    failed.dismiss();

    let tick = config.tick_interval().as_duration();
    while !store.is_empty() {
        tokio::time::sleep(tick).await;
    }

    ticker.abort();
    renderer.abort();
    Ok(())
}
