//! User management command handlers.

use crate::config::Config;
use crate::validation;

use super::{confirm, open_store, optional_field, preview, print_news, print_users};

pub async fn cmd_user_list(config: &Config, filter: Option<&str>) -> anyhow::Result<()> {
    let Some(store) = open_store(config).await? else {
        return Ok(());
    };

    print_users(&store, filter).await
}

pub async fn cmd_user_add(
    config: &Config,
    username: &str,
    email: &str,
    age_raw: Option<&str>,
    contact: Option<&str>,
    occupation: Option<&str>,
) -> anyhow::Result<()> {
    let age = match validation::parse_optional_age(age_raw.unwrap_or("")) {
        Ok(age) => age,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    let Some(store) = open_store(config).await? else {
        return Ok(());
    };

    match store
        .add_user(
            username,
            email,
            age,
            optional_field(contact),
            optional_field(occupation),
        )
        .await
    {
        Ok(id) => {
            println!("✓ Added user '{}' (ID: {id})", username.trim());
            println!();
            print_users(&store, None).await?;
        }
        Err(e) => println!("{e}"),
    }

    Ok(())
}

pub async fn cmd_user_update(
    config: &Config,
    id: i32,
    email: Option<&str>,
    age_raw: Option<&str>,
    contact: Option<&str>,
    occupation: Option<&str>,
) -> anyhow::Result<()> {
    let Some(store) = open_store(config).await? else {
        return Ok(());
    };

    let Some(user) = store.get_user(id).await? else {
        println!("User with ID {id} not found.");
        return Ok(());
    };

    // Username is read-only at this boundary; the stored value is passed
    // through unchanged.
    let merged_email = email.unwrap_or(&user.email);

    let merged_age = match age_raw {
        Some(raw) => match validation::parse_optional_age(raw) {
            Ok(age) => age,
            Err(e) => {
                println!("{e}");
                return Ok(());
            }
        },
        None => user.age,
    };

    let merged_contact = match contact {
        Some(c) => optional_field(Some(c)).map(str::to_string),
        None => user.contact_number.clone(),
    };

    let merged_occupation = match occupation {
        Some(o) => optional_field(Some(o)).map(str::to_string),
        None => user.occupation.clone(),
    };

    match store
        .update_user(
            id,
            &user.username,
            merged_email,
            merged_age,
            merged_contact.as_deref(),
            merged_occupation.as_deref(),
        )
        .await
    {
        Ok(()) => {
            println!("✓ Updated user '{}' (ID: {id})", user.username);
            println!();
            print_users(&store, None).await?;
        }
        Err(e) => println!("{e}"),
    }

    Ok(())
}

pub async fn cmd_user_remove(config: &Config, id: i32, yes: bool) -> anyhow::Result<()> {
    let Some(store) = open_store(config).await? else {
        return Ok(());
    };

    let Some(user) = store.get_user(id).await? else {
        println!("User with ID {id} not found.");
        return Ok(());
    };

    if !yes
        && !confirm(&format!(
            "Delete user '{}' (ID: {id}) and ALL their news posts?",
            user.username
        ))?
    {
        println!("Cancelled.");
        return Ok(());
    }

    match store.delete_user(id).await {
        Ok(true) => {
            println!("✓ Deleted user '{}' and associated news posts.", user.username);
            println!();
            print_users(&store, None).await?;
            println!();
            print_news(&store, None).await?;
        }
        Ok(false) => println!("User with ID {id} not found."),
        Err(e) => println!("{e}"),
    }

    Ok(())
}

pub async fn cmd_user_posts(config: &Config, username: &str) -> anyhow::Result<()> {
    let Some(store) = open_store(config).await? else {
        return Ok(());
    };

    let Some(user_id) = store.find_user_id_by_username(username.trim()).await? else {
        println!("User '{username}' does not exist.");
        return Ok(());
    };

    let posts = store.list_news_for_user(user_id).await?;

    if posts.is_empty() {
        println!("No news posts by '{username}'.");
        return Ok(());
    }

    println!("News Posts by {username} ({} total)", posts.len());
    println!("{:-<70}", "");

    for post in posts {
        println!("• [{}] {}", post.id, post.title);
        println!("  {} | {}", post.created_at, preview(&post.body));
    }

    Ok(())
}
