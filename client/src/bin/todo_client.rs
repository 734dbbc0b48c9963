//! Terminal client entry-point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use todo_client::api::HttpTodoApi;
use todo_client::board::TodoBoard;
use todo_client::shell::Shell;

/// Manage todos from the terminal.
#[derive(Debug, Parser)]
#[command(name = "todo-client", version)]
struct Args {
    /// Base URL of the todo API.
    #[arg(long, env = "TODO_API_URL", default_value = "http://localhost:5000")]
    api_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    let subscriber = fmt()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
    if let Err(err) = subscriber {
        report(&format!("tracing init failed: {err}"));
    }

    let mut board = TodoBoard::new(HttpTodoApi::new(&args.api_url));
    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock());
    match shell.run(&mut board).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&format!("terminal error: {err}"));
            ExitCode::FAILURE
        }
    }
}

fn report(message: &str) {
    if let Err(err) = writeln!(io::stderr().lock(), "{message}") {
        drop(err);
    }
}
