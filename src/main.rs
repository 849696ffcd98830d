use std::env;
use std::process::ExitCode;
use sumsub_csv_importer::csv_processor::file_exists;
use sumsub_csv_importer::{AppConfig, Importer, RowOutcome, SupabaseCredentials, SupabaseStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "Usage: sumsub-csv-importer <csv_file>";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let config = AppConfig::load_or_default(Some("config.toml"));

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("sumsub_csv_importer={}", config.logging.level).parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let csv_path = match env::args().nth(1) {
        Some(path) if file_exists(&path) => path,
        _ => {
            println!("{}", USAGE);
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!(error = %e, "Failed to load .env file");
        }
    }

    let credentials = SupabaseCredentials::from_env(&config.supabase)?;
    tracing::info!(
        table = %config.supabase.table,
        base_url = %credentials.base_url,
        "Loaded configuration"
    );

    let store = SupabaseStore::new(&config.supabase, credentials)?;
    let importer = Importer::new(store, &config)?;

    let summary = importer
        .import_file(&csv_path, |_, outcome| match outcome {
            RowOutcome::Imported { company } => println!("✅ {}", company),
            RowOutcome::Failed(e) => println!("❌ Error: {}", e),
            RowOutcome::Skipped(_) => {}
        })
        .await?;

    println!("\n{}", summary);

    Ok(ExitCode::SUCCESS)
}
