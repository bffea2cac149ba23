mod news;
mod users;

pub use news::{cmd_news_add, cmd_news_list, cmd_news_remove, cmd_news_update};
pub use users::{
    cmd_user_add, cmd_user_list, cmd_user_posts, cmd_user_remove, cmd_user_update,
};

use crate::config::Config;
use crate::db::Store;
use crate::error::Error;

/// Open the store for one operation; connection failure is surfaced as a
/// message and the current action is aborted.
pub(crate) async fn open_store(config: &Config) -> anyhow::Result<Option<Store>> {
    match Store::connect(&config.database.url()).await {
        Ok(store) => Ok(Some(store)),
        Err(Error::Connection(msg)) => {
            println!("DB connection error: {msg}");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn confirm(prompt: &str) -> anyhow::Result<bool> {
    println!("{prompt}");
    println!("Enter 'y' to confirm, anything else to cancel:");

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Re-query and print the user listing; every render is a fresh read of the
/// store.
pub(crate) async fn print_users(store: &Store, filter: Option<&str>) -> anyhow::Result<()> {
    let users = store.list_users(filter).await?;

    if users.is_empty() {
        match filter {
            Some(term) => println!("No users matching '{term}'."),
            None => {
                println!("No users yet.");
                println!();
                println!("Add one with: newsdesk users add <username> <email>");
            }
        }
        return Ok(());
    }

    println!("Users ({} total)", users.len());
    println!("{:-<70}", "");

    for user in users {
        let age = user.age.map_or_else(|| "-".to_string(), |a| a.to_string());
        let contact = user.contact_number.as_deref().unwrap_or("-");
        let occupation = user.occupation.as_deref().unwrap_or("-");

        println!("• {} <{}>", user.username, user.email);
        println!(
            "  ID: {} | Age: {} | Contact: {} | Occupation: {}",
            user.id, age, contact, occupation
        );
    }

    Ok(())
}

/// Re-query and print the news listing, newest first.
pub(crate) async fn print_news(store: &Store, filter: Option<&str>) -> anyhow::Result<()> {
    let posts = store.list_news(filter).await?;

    if posts.is_empty() {
        match filter {
            Some(term) => println!("No news posts matching '{term}'."),
            None => {
                println!("No news posts yet.");
                println!();
                println!("Add one with: newsdesk news add --user <username> --title <title>");
            }
        }
        return Ok(());
    }

    println!("News Posts ({} total)", posts.len());
    println!("{:-<70}", "");

    for entry in posts {
        let author = entry.author.as_deref().unwrap_or("(unknown)");
        println!("• [{}] {}", entry.post.id, entry.post.title);
        println!(
            "  By: {} | {} | {}",
            author,
            entry.post.created_at,
            preview(&entry.post.body)
        );
    }

    Ok(())
}

/// Collapse a multi-line body into one display line, like the table views in
/// the listing screens.
pub(crate) fn preview(body: &str) -> String {
    body.lines().collect::<Vec<_>>().join(" ")
}

/// Empty or whitespace-only optional fields are stored as NULL.
pub(crate) fn optional_field(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
