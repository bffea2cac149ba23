pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod validation;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::commands::{
    cmd_news_add, cmd_news_list, cmd_news_remove, cmd_news_update, cmd_user_add, cmd_user_list,
    cmd_user_posts, cmd_user_remove, cmd_user_update, open_store,
};
use cli::{Cli, Commands, NewsCommands, UserCommands};
pub use config::Config;
pub use error::Error;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Users { command } => match command {
            UserCommands::List { filter } => cmd_user_list(&config, filter.as_deref()).await,
            UserCommands::Add {
                username,
                email,
                age,
                contact,
                occupation,
            } => {
                cmd_user_add(
                    &config,
                    &username,
                    &email,
                    age.as_deref(),
                    contact.as_deref(),
                    occupation.as_deref(),
                )
                .await
            }
            UserCommands::Update {
                id,
                email,
                age,
                contact,
                occupation,
            } => {
                cmd_user_update(
                    &config,
                    id,
                    email.as_deref(),
                    age.as_deref(),
                    contact.as_deref(),
                    occupation.as_deref(),
                )
                .await
            }
            UserCommands::Remove { id, yes } => cmd_user_remove(&config, id, yes).await,
            UserCommands::Posts { username } => cmd_user_posts(&config, &username).await,
        },

        Commands::News { command } => match command {
            NewsCommands::List { filter } => cmd_news_list(&config, filter.as_deref()).await,
            NewsCommands::Add { user, title, body } => {
                cmd_news_add(&config, &user, &title, body.as_deref()).await
            }
            NewsCommands::Update {
                id,
                title,
                body,
                user,
            } => {
                cmd_news_update(
                    &config,
                    id,
                    title.as_deref(),
                    body.as_deref(),
                    user.as_deref(),
                )
                .await
            }
            NewsCommands::Remove { id, yes } => cmd_news_remove(&config, id, yes).await,
        },

        Commands::Init => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists.");
            }
            Ok(())
        }

        Commands::Ping => {
            let Some(store) = open_store(&config).await? else {
                return Ok(());
            };
            store.ping().await?;
            println!("✓ Database reachable at {}", config.database.url());
            Ok(())
        }
    }
}
