use anyhow::Context;
use clap::{Parser, Subcommand};
use customer_api::cli::{NewAdministrator, create_administrator};
use customer_api::config::database::{DatabaseConfig, init_db_pool};
use customer_api_db::PgCustomerRepository;
use dialoguer::{Input, Password};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "customer-api-cli")]
#[command(about = "Customer API CLI - Administrative tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a customer with the administrator role
    CreateAdmin {
        /// Full name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address used to log in
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// National ID number
        #[arg(long)]
        national_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let database_config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&database_config).await?;
    let customers = PgCustomerRepository::new(pool);

    match cli.command {
        Commands::CreateAdmin {
            name,
            email,
            password,
            phone,
            national_id,
        } => {
            let name = match name {
                Some(name) => name,
                None => Input::new()
                    .with_prompt("Name")
                    .interact_text()
                    .context("Failed to read name")?,
            };

            let email = match email {
                Some(email) => email,
                None => Input::new()
                    .with_prompt("Email address")
                    .interact_text()
                    .context("Failed to read email")?,
            };

            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()
                    .context("Failed to read password")?,
            };

            let admin = NewAdministrator {
                name,
                email,
                password,
                phone,
                national_id,
            };

            match create_administrator(&customers, admin).await {
                Ok(customer) => {
                    println!("\n✅ Administrator created successfully!");
                    println!("   Id: {}", customer.id);
                    println!("   Email: {}", customer.email);
                    println!("   Name: {}", customer.name);
                }
                Err(e) => {
                    eprintln!("\n❌ Error creating administrator: {}", e.error);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
