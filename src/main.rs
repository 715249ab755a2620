use clap::Parser;
use habit_client::config::Command;
use habit_client::utils::logger;
use habit_client::{CliConfig, HabitApi};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let api = HabitApi::new(config.api_url);

    match run(&api, config.command).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run(api: &HabitApi, command: Command) -> habit_client::Result<Value> {
    match command {
        Command::List => api.get_habits().await,
        Command::Show { id } => api.get_habit(id).await,
        Command::Add { habit } => {
            let habit: Value = serde_json::from_str(&habit)?;
            api.create_habit(&habit).await
        }
        Command::Update { id, habit } => {
            let habit: Value = serde_json::from_str(&habit)?;
            api.update_habit(id, &habit).await
        }
        Command::Delete { id } => api.delete_habit(id).await,
        Command::Entries { id } => api.get_habit_entries(id).await,
        Command::Toggle { id, date } => {
            // Same default the server applies when the date is omitted.
            let date =
                date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
            api.toggle_habit_entry(id, &date).await
        }
        Command::Log { id, entry } => {
            let entry: Value = serde_json::from_str(&entry)?;
            api.create_habit_entry(id, &entry).await
        }
    }
}
