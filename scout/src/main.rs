mod agent;
mod config;

use std::io::{self, BufRead, Write};

use agent::ScoutAgent;
use config::ScoutConfig;

const DEFAULT_NUM_PAPERS: u32 = 3;

fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        // stdin closed
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = ScoutConfig::from_env();

    println!("Welcome to the Paper Scout!");
    println!("This agent discovers and summarizes recent research papers.");
    println!("Before starting, make sure both services are running:");
    println!("  - Paper search service: {}", config.search_url);
    println!("  - PDF summarize service: {}", config.summarize_url);
    println!("Type 'exit' or 'quit' to end the session.");

    let agent = ScoutAgent::new(config);

    loop {
        let Some(topic) = prompt("\nEnter a research topic (e.g., 'causal inference in AI'): ")?
        else {
            break;
        };
        if topic.eq_ignore_ascii_case("exit") || topic.eq_ignore_ascii_case("quit") {
            println!("Exiting Paper Scout. Goodbye!");
            break;
        }

        let Some(count_input) = prompt("How many papers to scout? (default: 3): ")? else {
            break;
        };
        let num_papers = if count_input.is_empty() {
            DEFAULT_NUM_PAPERS
        } else {
            match count_input.parse::<i64>() {
                Ok(n) if n > 0 => n as u32,
                Ok(_) => {
                    println!("Please enter a positive number.");
                    continue;
                }
                Err(_) => {
                    println!("Invalid number. Please enter a whole number.");
                    continue;
                }
            }
        };

        agent.discover_and_summarize(&topic, num_papers).await;
    }

    Ok(())
}
