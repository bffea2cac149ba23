//! Command-line interface for newsdesk.
//!
//! The presentation layer: collects raw field text, runs validation and
//! repository calls, prints success/failure messages, and re-renders
//! listings after each mutation.

pub mod commands;

use clap::{Parser, Subcommand};

/// Newsdesk - user & news post management
#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage users
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Manage news posts
    News {
        #[command(subcommand)]
        command: NewsCommands,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Check database connectivity
    Ping,
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// List users, optionally filtered by username substring
    #[command(alias = "ls", alias = "l")]
    List {
        /// Username substring to filter by
        #[arg(long)]
        filter: Option<String>,
    },

    /// Create a new user
    #[command(alias = "a")]
    Add {
        /// Unique username
        username: String,
        /// Unique email address
        email: String,
        /// Age (optional, must be an integer if given)
        #[arg(long)]
        age: Option<String>,
        /// Contact number
        #[arg(long)]
        contact: Option<String>,
        /// Occupation
        #[arg(long)]
        occupation: Option<String>,
    },

    /// Update an existing user (username is immutable here)
    Update {
        /// User ID to update
        id: i32,
        /// New email address
        #[arg(long)]
        email: Option<String>,
        /// New age (pass an empty string to clear)
        #[arg(long)]
        age: Option<String>,
        /// New contact number
        #[arg(long)]
        contact: Option<String>,
        /// New occupation
        #[arg(long)]
        occupation: Option<String>,
    },

    /// Delete a user and ALL their news posts
    #[command(alias = "rm", alias = "r")]
    Remove {
        /// User ID to delete
        id: i32,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List news posts by a given user, newest first
    Posts {
        /// Username to look up
        username: String,
    },
}

#[derive(Subcommand)]
pub enum NewsCommands {
    /// List news posts, optionally filtered by title/body/author substring
    #[command(alias = "ls", alias = "l")]
    List {
        /// Substring matched against title, body, or author username
        #[arg(long)]
        filter: Option<String>,
    },

    /// Create a news post for an existing user
    #[command(alias = "a")]
    Add {
        /// Username of the post owner
        #[arg(long)]
        user: String,
        /// Post title
        #[arg(long)]
        title: String,
        /// Post body; read from stdin when omitted
        #[arg(long)]
        body: Option<String>,
    },

    /// Update a news post, optionally reassigning its owner
    Update {
        /// News post ID to update
        id: i32,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New body
        #[arg(long)]
        body: Option<String>,
        /// Reassign to this username
        #[arg(long)]
        user: Option<String>,
    },

    /// Delete a news post
    #[command(alias = "rm", alias = "r")]
    Remove {
        /// News post ID to delete
        id: i32,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
