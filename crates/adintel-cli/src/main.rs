use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "adintel-cli")]
#[command(about = "Ad intelligence command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a synthetic batch for the whole catalog and write it to the
    /// database.
    Seed {
        /// Delete previously seeded rows before inserting.
        #[arg(long)]
        clear: bool,
    },
    /// Load and validate the brand catalog, then print a summary.
    Catalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = adintel_core::load_app_config()?;
    let catalog = adintel_core::load_catalog(&config.catalog_path)?;

    match cli.command {
        Commands::Seed { clear } => {
            let pool_config = adintel_db::PoolConfig::from_app_config(&config);
            let pool = adintel_db::connect_pool(&config.database_url, pool_config).await?;
            let applied = adintel_db::run_migrations(&pool).await?;
            if applied > 0 {
                tracing::info!(applied, "migrations applied");
            }

            let cleared = if clear {
                adintel_db::delete_synthetic_ads(&pool).await?
            } else {
                0
            };

            let records = adintel_synth::generate(&catalog)?;
            let inserted = adintel_db::upsert_ads(&pool, &records).await?;
            let total = adintel_db::count_ads(&pool, false).await?;
            let active = adintel_db::count_ads(&pool, true).await?;

            println!("cleared {cleared} previously seeded ads");
            println!("inserted {inserted} ads ({active} active, {total} total in corpus)");
        }
        Commands::Catalog => {
            println!("catalog OK: {} brands", catalog.brands.len());
            for brand in &catalog.brands {
                println!(
                    "  {} ({}): {} competitors, themes: {}",
                    brand.key,
                    brand.vertical,
                    brand.competitors.len(),
                    brand.themes.join(", ")
                );
            }
        }
    }

    Ok(())
}
