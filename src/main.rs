use chart_interpreter::constants::FLAG_HTML;
use chart_interpreter::print_help::print_help;
use chart_interpreter::render::{render_error, render_html_card, render_terminal};
use chart_interpreter::utils::{create_spinner, read_image_file};
use chart_interpreter::{ClientConfig, ImageInterpretationClient};
use std::{env, error::Error, process};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.iter().any(|arg| arg == "-help" || arg == "-h") {
        print_help();
        return;
    }

    if let Err(e) = run(&args).await {
        eprintln!("{}", render_error(&e.to_string()));
        process::exit(1);
    }
}

async fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let as_html = args.iter().any(|arg| arg == FLAG_HTML);
    let image_path = match args[1..].iter().find(|arg| arg.as_str() != FLAG_HTML) {
        Some(path) => path,
        None => {
            print_help();
            return Ok(());
        }
    };

    let client = ImageInterpretationClient::new(ClientConfig::from_env()?)?;
    let image = read_image_file(image_path)
        .map_err(|e| format!("Failed to open image file {}: {}", image_path, e))?;

    let spinner = create_spinner("magenta", "Interpreting the chart...".to_string());
    let result = client.interpret(&image).await;
    spinner.finish_and_clear();

    match result {
        Ok(interpretation) if as_html => print!("{}", render_html_card(&interpretation)),
        Ok(interpretation) => println!("{}", render_terminal(&interpretation)),
        Err(e) => {
            log::error!("Interpretation failed ({})", e.kind());
            return Err(e.into());
        }
    }

    Ok(())
}
