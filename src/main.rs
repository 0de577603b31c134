use car_shop::utils::{logger, validation::Validate};
use car_shop::{
    console, view, CliConfig, LocalStorage, QueuedStorage, SessionOptions, ShopSession,
    StorageCartStore,
};
use clap::Parser;
use tokio::io::{AsyncBufRead, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.log_format, config.verbose);
    tracing::info!("Starting car-shop");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.resolve().and_then(|settings| {
        settings.validate()?;
        Ok(settings)
    }) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    tracing::info!(
        "✅ {} ready: {} cars, cart stored in {} under '{}'",
        settings.shop_name,
        settings.catalog.len(),
        settings.storage_dir,
        settings.cart_key
    );

    let input: Box<dyn AsyncBufRead + Unpin> = match &config.script {
        Some(path) => Box::new(BufReader::new(tokio::fs::File::open(path).await?)),
        None => {
            println!("{}", console::HELP);
            Box::new(BufReader::new(tokio::io::stdin()))
        }
    };

    let (storage, writer) = QueuedStorage::spawn(LocalStorage::new(&settings.storage_dir));
    let store = StorageCartStore::with_key(storage, settings.cart_key.clone());
    let mut session = ShopSession::open(
        settings.catalog.clone(),
        store,
        SessionOptions::from_config(&settings),
    );
    let format = &settings.price_format;

    println!("{} {}", settings.shop_name, view::cart_badge(&session));

    let mut stdout = std::io::stdout();
    if let Err(e) = console::run(&mut session, input, &mut stdout, format).await {
        tracing::error!("Console stopped early: {}", e);
    }

    print!("{}", view::cart_summary(&session, format));

    let storage = session.close().into_storage();
    storage.flush().await?;
    drop(storage);
    writer.await?;

    tracing::info!("👋 Cart saved, goodbye");
    Ok(())
}
