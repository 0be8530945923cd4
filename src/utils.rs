use crate::constants::IMAGE_DATA_URI_PREFIX;
use indicatif::{ProgressBar, ProgressStyle};
use std::{fs, io, path::Path};

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

pub fn read_image_file(image_path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    fs::read(image_path)
}

pub fn encode_image(image: &[u8]) -> String {
    base64::encode(image)
}

pub fn image_data_uri(image: &[u8]) -> String {
    format!("{}{}", IMAGE_DATA_URI_PREFIX, encode_image(image))
}
