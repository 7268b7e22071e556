mod console;
mod infrastructure;
mod render;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    console::run().await
}
