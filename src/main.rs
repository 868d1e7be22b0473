use notify_client::cli::CliApp;

#[tokio::main]
async fn main() {
    if let Err(err) = CliApp::run().await {
        eprintln!("[-] {}", err);
        std::process::exit(err.exit_code());
    }
}
