//! News post command handlers.

use std::io::Read;

use crate::config::Config;

use super::{confirm, open_store, print_news};

pub async fn cmd_news_list(config: &Config, filter: Option<&str>) -> anyhow::Result<()> {
    let Some(store) = open_store(config).await? else {
        return Ok(());
    };

    print_news(&store, filter).await
}

pub async fn cmd_news_add(
    config: &Config,
    username: &str,
    title: &str,
    body: Option<&str>,
) -> anyhow::Result<()> {
    let body = match body {
        Some(b) => b.to_string(),
        None => {
            // Multi-line entry point: read the body from stdin until EOF.
            println!("Enter body (end with Ctrl-D):");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let Some(store) = open_store(config).await? else {
        return Ok(());
    };

    let Some(user_id) = store.find_user_id_by_username(username.trim()).await? else {
        println!("User '{username}' does not exist.");
        return Ok(());
    };

    match store.add_news(user_id, title, &body).await {
        Ok(id) => {
            println!("✓ Added news post '{}' (ID: {id})", title.trim());
            println!();
            print_news(&store, None).await?;
        }
        Err(e) => println!("{e}"),
    }

    Ok(())
}

pub async fn cmd_news_update(
    config: &Config,
    id: i32,
    title: Option<&str>,
    body: Option<&str>,
    username: Option<&str>,
) -> anyhow::Result<()> {
    let Some(store) = open_store(config).await? else {
        return Ok(());
    };

    let Some(post) = store.get_news(id).await? else {
        println!("News post with ID {id} not found.");
        return Ok(());
    };

    // Re-resolve the username when the owner is being reassigned.
    let new_owner = match username {
        Some(name) => match store.find_user_id_by_username(name.trim()).await? {
            Some(user_id) => Some(user_id),
            None => {
                println!("User '{name}' does not exist.");
                return Ok(());
            }
        },
        None => None,
    };

    let merged_title = title.unwrap_or(&post.title);
    let merged_body = body.unwrap_or(&post.body);

    match store.update_news(id, merged_title, merged_body, new_owner).await {
        Ok(()) => {
            println!("✓ Updated news post {id}");
            println!();
            print_news(&store, None).await?;
        }
        Err(e) => println!("{e}"),
    }

    Ok(())
}

pub async fn cmd_news_remove(config: &Config, id: i32, yes: bool) -> anyhow::Result<()> {
    let Some(store) = open_store(config).await? else {
        return Ok(());
    };

    let Some(post) = store.get_news(id).await? else {
        println!("News post with ID {id} not found.");
        return Ok(());
    };

    if !yes && !confirm(&format!("Delete news post '{}' (ID: {id})?", post.title))? {
        println!("Cancelled.");
        return Ok(());
    }

    match store.delete_news(id).await {
        Ok(true) => {
            println!("✓ Deleted news post {id}");
            println!();
            print_news(&store, None).await?;
        }
        Ok(false) => println!("News post with ID {id} not found."),
        Err(e) => println!("{e}"),
    }

    Ok(())
}
