use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " CHART INTERPRETER ".yellow());
    println!("Usage:");
    println!("  {} [option] <image_path>", "chart".bold().green());
    println!("\nOptions:");
    println!(
        "  {}     Print the interpretation as an HTML card.",
        "-html".bold().magenta()
    );
    println!(
        "  {}  Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nArguments:");
    println!(
        "  {}  A PNG or JPEG chart image to interpret.",
        "<image_path>".bold().green()
    );
    println!("\nEnvironment:");
    println!("  {}       Bearer token (required).", "OPENAI_API_KEY".bold());
    println!("  {}       Endpoint override.", "OPENAI_API_URL".bold());
    println!("  {}  Model override.", "OPENAI_VISION_MODEL".bold());
    println!("  {}  Request timeout in seconds.", "OPENAI_TIMEOUT_SECS".bold());
    println!("\nExamples:");
    println!("  {} sales_q3.png", "chart".bold().green());
    println!("  {} revenue.jpg", "chart -html".bold().magenta());
    println!("{:━^60}", "".yellow());
}
