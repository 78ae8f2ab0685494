//! Interactive dashboard session.
//!
//! Renders the full board, then reads line commands and dispatches
//! them through the model. Chores live for the session; the theme is
//! persisted whenever a `ThemeChanged` event comes back.

use std::io::{self, BufRead, Write};

use choreboard_core::{
    render, Dashboard, Event, MockWeatherProvider, MonthGrid, Preferences, WeatherProvider,
};

const HELP: &str = "commands:
  add <text>      add a chore
  toggle <id>     flip a chore's completion
  theme <tag>     switch and persist the theme
  weather <city>  fetch a simulated forecast
  show            re-render the dashboard
  quit            leave the session";

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    let mut prefs = Preferences::load()?;
    let mut dash = Dashboard::new(&prefs);
    let provider = MockWeatherProvider::new();

    render_board(&dash);
    println!("{HELP}");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "show" => render_board(&dash),
            "add" => match dash.add_chore(rest) {
                Ok(_) => print!("{}", render::chore_list(&dash.chores)),
                Err(e) => eprintln!("{e}"),
            },
            "toggle" => match rest.parse::<u64>() {
                Ok(id) => match dash.toggle_chore(id) {
                    Ok(_) => print!("{}", render::chore_list(&dash.chores)),
                    Err(e) => eprintln!("{e}"),
                },
                Err(_) => eprintln!("toggle takes a chore id"),
            },
            "theme" => {
                if let Event::ThemeChanged { tag, .. } = dash.select_theme(rest) {
                    prefs.set_theme(&tag);
                    prefs.save()?;
                    println!("theme: {}", dash.theme.active());
                }
            }
            "weather" => match dash.request_weather(rest) {
                Ok((token, _)) => {
                    print!("{}", render::weather_panel(&dash.weather));
                    let snapshot = rt.block_on(provider.fetch(rest))?;
                    match dash.install_weather(token, snapshot) {
                        Event::WeatherUpdated { .. } => {
                            if let Some(snapshot) = dash.weather.snapshot() {
                                let times = choreboard_core::optimal_times(
                                    snapshot.condition,
                                    snapshot.temperature_c,
                                );
                                print!("{}", render::weather_card(snapshot));
                                print!("{}", render::optimal_times(&times));
                            }
                        }
                        _ => eprintln!("stale forecast dropped"),
                    }
                }
                Err(e) => eprintln!("{e}"),
            },
            other => eprintln!("unknown command: {other} (try 'help')"),
        }
    }
    Ok(())
}

fn render_board(dash: &Dashboard) {
    println!("{}", choreboard_core::calendar::today_long_date());
    println!("theme: {}", dash.theme.active());
    println!();
    print!("{}", render::month_grid(&MonthGrid::current()));
    println!();
    print!("{}", render::chore_list(&dash.chores));
    println!();
    print!("{}", render::weather_panel(&dash.weather));
}
