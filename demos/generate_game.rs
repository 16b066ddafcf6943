//! Streams a game generation and saves the resulting HTML file.
//!
//! Configure the vendor through the environment (a `.env` file works too):
//!
//! ```bash
//! export GAMECRAFT_VENDOR=deepseek
//! export DEEPSEEK_API_KEY=your_api_key_here
//! cargo run --example generate_game -- "贪吃蛇" "使用方向键控制，吃到食物后变长"
//! ```

use gamecraft_llm::{save_html, Error, GameGenerator, GenerationRequest, GeneratorFactory};
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gamecraft_llm=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let game_type = args.next().unwrap_or_else(|| "贪吃蛇".to_string());
    let prompt = args
        .next()
        .unwrap_or_else(|| "创建一个经典的贪吃蛇游戏，使用HTML5 Canvas实现。".to_string());

    let generator = GeneratorFactory::from_env()?;
    println!(
        "Generating {game_type} with {} ({})...",
        generator.vendor().display_name,
        generator.vendor().default_model
    );

    let request = GenerationRequest::new(game_type.clone(), prompt);

    // Print only the newly arrived suffix of each cumulative snapshot.
    let mut printed = 0;
    let mut on_progress = |text: &str| {
        print!("{}", &text[printed..]);
        std::io::stdout().flush().ok();
        printed = text.len();
    };

    let html = generator.generate(&request, Some(&mut on_progress)).await?;
    println!();

    let path = save_html(std::env::current_dir()?, &game_type, &html)?;
    println!("Saved {} bytes to {}", html.len(), path.display());
    Ok(())
}
