use anyhow::Result;
use clap::Parser;
use inquire::{InquireError, Text};
use weathernow_core::{Config, WeatherSearch, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathernow", version, about = "7-day weather forecast for any city")]
pub struct Cli {
    /// City name, e.g. "Paris". Omit to be prompted interactively.
    pub city: Option<String>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;
        let mut search = WeatherSearch::new(provider_from_config(&config));

        match self.city {
            Some(city) => submit_and_render(&mut search, &city).await,
            None => {
                println!("🌤️ Weather Now: 7-day forecast for any city\n");
                loop {
                    let input = match Text::new("Enter city name...").prompt() {
                        Ok(input) => input,
                        // Esc or Ctrl-C leaves the loop.
                        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                            break;
                        }
                        Err(err) => return Err(err.into()),
                    };
                    submit_and_render(&mut search, &input).await;
                }
            }
        }

        Ok(())
    }
}

/// Run one submission, echoing the `Loading` state before the pipeline and
/// the terminal state after it.
async fn submit_and_render(search: &mut WeatherSearch, input: &str) {
    if search.state().on_submit(input).is_loading() {
        println!("{}", render::LOADING_LINE);
    }

    let state = search.submit(input).await;
    print!("{}", render::state(state));
}
