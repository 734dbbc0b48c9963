//! Print the OpenAPI document as JSON.

use std::io::Write;
use std::process::ExitCode;

use todo_backend::ApiDoc;
use utoipa::OpenApi;

fn main() -> ExitCode {
    let json = match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => json,
        Err(err) => {
            writeln!(std::io::stderr(), "failed to serialise OpenAPI document: {err}").ok();
            return ExitCode::FAILURE;
        }
    };
    if writeln!(std::io::stdout(), "{json}").is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
