use anyhow::Result;

use listnav_core::AppConfig;
use listnav_tui::{app::App, input::Action, keymap::Keymap};

pub fn run(config: &AppConfig) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap, &config.bindings);
    let options = keymap.options();

    let scopes = if options.scopes.is_empty() {
        "all".to_string()
    } else {
        options.scopes.join(", ")
    };
    println!("Navigation bindings:");
    println!("  enabled:         {}", options.enabled);
    println!("  scopes:          {}", scopes);
    println!("  enable_on_input: {}", options.enable_on_input);
    println!("  list scope:      {}", App::SCOPE);
    println!();

    println!("Keys:");
    for (binding, action) in keymap.entries() {
        println!("  {:<12} {}", binding.to_string(), describe(&action));
    }

    Ok(())
}

fn describe(action: &Action) -> String {
    match action {
        Action::Quit => "quit".to_string(),
        Action::Navigate(key) => format!("move: {}", key),
        Action::Select => "select active item".to_string(),
        Action::StartFilter => "filter".to_string(),
        Action::ClearFilter => "clear filter".to_string(),
        other => format!("{:?}", other).to_lowercase(),
    }
}
