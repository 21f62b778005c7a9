//! foodq CLI - Command-line interface for the recipe queue service

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9527";

#[derive(Parser)]
#[command(name = "foodq")]
#[command(about = "Recipe queue CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "FOODQ_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Show the recipes in a queue, in cooking order
    List {
        /// Queue ID
        queue_id: i64,
    },

    /// Show the next recipe to cook
    Next {
        /// Queue ID
        queue_id: i64,
    },

    /// Append a recipe to the end of a queue
    Add {
        /// Queue ID
        queue_id: i64,

        /// Recipe ID
        recipe_id: i64,
    },

    /// Remove the first occurrence of a recipe
    Remove {
        /// Queue ID
        queue_id: i64,

        /// Recipe ID
        recipe_id: i64,
    },

    /// Move a recipe to a new zero-based position
    Move {
        /// Queue ID
        queue_id: i64,

        /// Recipe ID
        recipe_id: i64,

        /// Target position (0 = cook first)
        #[arg(allow_negative_numbers = true)]
        position: i64,
    },

    /// Register a user
    CreateUser {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Mark the user as subscribed
        #[arg(long)]
        subscribe: bool,
    },

    /// Create the queue for a user
    CreateQueue {
        /// User ID
        user_id: i64,
    },
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Tabled)]
struct QueueEntry {
    position: usize,
    recipe_id: i64,
}

#[derive(Deserialize)]
struct ListResult {
    recipes: Vec<i64>,
}

#[derive(Deserialize, Tabled)]
struct CreateQueueResult {
    queue_id: i64,
    user_id: i64,
    created_at: i64,
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to server")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

fn queue_table(recipes: &[i64]) -> String {
    let entries: Vec<QueueEntry> = recipes
        .iter()
        .enumerate()
        .map(|(position, &recipe_id)| QueueEntry {
            position,
            recipe_id,
        })
        .collect();

    Table::new(entries).to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { queue_id } => {
            let result = call_rpc(&cli.rpc_url, "queue.list.v1", json!({ "queue_id": queue_id })).await?;
            let list: ListResult = serde_json::from_value(result)?;

            println!("{}", format!("Queue {}", queue_id).cyan().bold());
            if list.recipes.is_empty() {
                println!("{}", "(empty)".yellow());
            } else {
                println!("{}", queue_table(&list.recipes));
            }
        }

        Commands::Next { queue_id } => {
            let result = call_rpc(&cli.rpc_url, "queue.next.v1", json!({ "queue_id": queue_id })).await?;

            match result["recipe_id"].as_i64() {
                Some(recipe_id) => {
                    println!("{} {}", "Next recipe:".bold(), recipe_id.to_string().green());
                }
                None => println!("{}", format!("Queue {} is empty", queue_id).yellow()),
            }
        }

        Commands::Add {
            queue_id,
            recipe_id,
        } => {
            let params = json!({ "queue_id": queue_id, "recipe_id": recipe_id });
            let result = call_rpc(&cli.rpc_url, "queue.enqueue.v1", params).await?;

            println!(
                "{}",
                format!(
                    "✓ Recipe {} queued ({} in queue)",
                    recipe_id, result["length"]
                )
                .green()
                .bold()
            );
        }

        Commands::Remove {
            queue_id,
            recipe_id,
        } => {
            let params = json!({ "queue_id": queue_id, "recipe_id": recipe_id });
            call_rpc(&cli.rpc_url, "queue.dequeue.v1", params).await?;

            println!(
                "{}",
                format!("✓ Recipe {} removed from queue {}", recipe_id, queue_id)
                    .green()
                    .bold()
            );
        }

        Commands::Move {
            queue_id,
            recipe_id,
            position,
        } => {
            let params = json!({
                "queue_id": queue_id,
                "recipe_id": recipe_id,
                "position": position,
            });
            call_rpc(&cli.rpc_url, "queue.reorder.v1", params).await?;

            println!(
                "{}",
                format!("✓ Recipe {} moved to position {}", recipe_id, position)
                    .green()
                    .bold()
            );
        }

        Commands::CreateUser {
            name,
            email,
            subscribe,
        } => {
            let params = json!({
                "name": name,
                "email": email,
                "subscription": subscribe,
            });
            let result = call_rpc(&cli.rpc_url, "user.create.v1", params).await?;

            println!(
                "{}",
                format!("✓ User {} created", result["user_id"]).green().bold()
            );
        }

        Commands::CreateQueue { user_id } => {
            let result = call_rpc(&cli.rpc_url, "queue.create.v1", json!({ "user_id": user_id })).await?;
            let created: CreateQueueResult = serde_json::from_value(result)?;

            println!("{}", "✓ Queue created".green().bold());
            println!();
            println!("{}", Table::new(vec![created]));
        }
    }

    Ok(())
}
