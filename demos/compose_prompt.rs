//! Prints the messages each vendor would receive for a request, without any network call.
//!
//! ```bash
//! cargo run --example compose_prompt -- "Flappy Bird" "点击屏幕使小鸟向上飞行" "🐦"
//! ```

use gamecraft_llm::prompt::{self, SYSTEM_INSTRUCTION};
use gamecraft_llm::{GenerationRequest, VENDORS};

fn main() {
    let mut args = std::env::args().skip(1);
    let game_type = args.next().unwrap_or_else(|| "Flappy Bird".to_string());
    let requirement = args
        .next()
        .unwrap_or_else(|| "控制小鸟飞行，躲避管道障碍物。".to_string());

    let mut request = GenerationRequest::new(game_type, requirement);
    if let Some(icon) = args.next() {
        request = request.with_icon(icon);
    }

    println!("=== system ===\n{SYSTEM_INSTRUCTION}\n");
    for vendor in VENDORS {
        println!("=== user ({}, {}) ===", vendor.display_name, vendor.default_model);
        println!("{}\n", prompt::compose_with(&request, &vendor.quirks));
    }
}
