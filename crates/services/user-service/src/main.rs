//! User Service - command line front end for user registration.

use clap::{Parser, Subcommand};

use common::{init_tracing, ErrorResponse};
use domain::CreateUser;
use user_service_lib::config::UserServiceConfig;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User registration service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user and schedule the confirmation email
    Register {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, env = "USER_PASSWORD", default_value = "", hide_env_values = true)]
        password: String,
        #[arg(long, env = "USER_REPEAT_PASSWORD", default_value = "", hide_env_values = true)]
        repeat_password: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = UserServiceConfig::from_env();
    init_tracing(&config.service);

    let cli = Cli::parse();

    match cli.command {
        Commands::Register {
            first_name,
            last_name,
            email,
            password,
            repeat_password,
        } => {
            let input = CreateUser {
                first_name,
                last_name,
                email,
                password,
                repeat_password,
            };

            match user_service_lib::run_registration(&config, input).await {
                Ok(user) => println!("{}", serde_json::to_string_pretty(&user)?),
                Err(e) => {
                    tracing::error!(code = e.code(), "Registration failed: {}", e);
                    eprintln!("{}", serde_json::to_string_pretty(&ErrorResponse::from(&e))?);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
