use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};

use layout_gen::layout::{fallback_layout, Device};

#[derive(Parser)]
#[command(name = "layout-cli")]
#[command(about = "Exercise the AI layout generation service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a layout from a running service
    Generate {
        /// Natural-language description of the page
        prompt: String,
        /// Target device
        #[arg(short, long, value_enum, default_value = "desktop")]
        device: DeviceArg,
        /// Path to a JSON file holding the current canvas state
        #[arg(short, long)]
        current_layout: Option<std::path::PathBuf>,
    },
    /// Print the fallback tree a failed generation would produce
    Fallback {
        /// Prompt echoed into the fallback subtitle
        prompt: String,
        /// Target device
        #[arg(short, long, value_enum, default_value = "desktop")]
        device: DeviceArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DeviceArg {
    Desktop,
    Mobile,
}

impl From<DeviceArg> for Device {
    fn from(arg: DeviceArg) -> Self {
        match arg {
            DeviceArg::Desktop => Device::Desktop,
            DeviceArg::Mobile => Device::Mobile,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            prompt,
            device,
            current_layout,
        } => {
            let current = match current_layout {
                Some(path) => {
                    let text = std::fs::read_to_string(path)?;
                    Some(serde_json::from_str::<Value>(&text)?)
                }
                None => None,
            };

            let body = json!({
                "prompt": prompt,
                "deviceMode": Device::from(device),
                "currentLayout": current,
            });

            let client = reqwest::Client::new();
            let res = client.post(&cli.url).json(&body).send().await?;
            print_response(res).await?;
        }
        Commands::Fallback { prompt, device } => {
            let tree = fallback_layout(device.into(), &prompt);
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
