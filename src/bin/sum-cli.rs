use clap::Parser;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "sum-cli")]
#[command(about = "Send one sum request to a running sum service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8081")]
    url: String,

    #[arg(allow_negative_numbers = true)]
    x: i64,

    #[arg(allow_negative_numbers = true)]
    y: i64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/sum", cli.url))
        .json(&serde_json::json!({ "X": cli.x, "Y": cli.y }))
        .send()
        .await?;

    let status = res.status();
    let json: Value = res.json().await?;

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        eprintln!("Response: {}", serde_json::to_string_pretty(&json)?);
        std::process::exit(1);
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
