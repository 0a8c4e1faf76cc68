use crate::configuration::Configuration;
use clap::Parser;

const DEFAULT_PORT: &str = "8000";

#[derive(Debug, Parser)]
#[command(name = "autocare-api", about = "Vehicle service appointment booking API")]
struct Arguments {
    /// Port the HTTP server listens on.
    #[arg(short, long)]
    port: Option<String>,

    /// PostgreSQL connection URL. Bookings stay in memory when unset.
    #[arg(short, long)]
    database_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ConfigurationHandler {
    port: String,
    database_url: Option<String>,
}

impl ConfigurationHandler {
    /// Command line arguments win over environment variables (a `.env` file
    /// is loaded first if present).
    pub fn parse_arguments() -> Self {
        dotenvy::dotenv().ok();
        let arguments = Arguments::parse();
        Self {
            port: arguments
                .port
                .or_else(|| std::env::var("PORT").ok())
                .unwrap_or_else(|| DEFAULT_PORT.into()),
            database_url: arguments
                .database_url
                .or_else(|| std::env::var("DATABASE_URL").ok()),
        }
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> String {
        self.port.clone()
    }

    fn database_url(&self) -> Option<String> {
        self.database_url.clone()
    }
}
