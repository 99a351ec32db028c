//! Operator CLI for the staffgate portal.
//!
//! Wires the access-control core to a file-backed session store and the
//! portal REST API. Useful for poking at a deployment from a terminal:
//!
//! ```text
//! staffgate-portal login alice hunter2
//! staffgate-portal check /hr/payroll
//! staffgate-portal whoami
//! staffgate-portal logout
//! ```

mod config;
mod store;

use std::process::ExitCode;
use std::sync::Arc;

use staffgate_access::{LOGIN_PATH, RouteDecision, SessionResolver, ViewRegistry, default_landing_path};
use staffgate_client::{AuthBackend, AuthClient, Credentials};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::PortalConfig;
use crate::store::FileStore;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PortalConfig::from_env().expect("failed to load configuration");
    let file_store = Arc::new(FileStore::new(config.session_file.clone()));
    let session = SessionResolver::new(file_store.clone());
    let registry = ViewRegistry::portal();
    let client = AuthClient::new(config.api_base_url.clone(), session.clone());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["login", username, password] => {
            match client
                .login(&Credentials::new(*username, *password))
                .await
            {
                Ok(identity) => {
                    println!(
                        "logged in as {} ({}), landing at {}",
                        identity.username(),
                        identity.role_str(),
                        default_landing_path(&session.auth_state()),
                    );
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("login failed: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        ["logout"] => match client.logout().await {
            Ok(()) => {
                println!("logged out");
                ExitCode::SUCCESS
            }
            Err(e) => {
                // Local session is already cleared; only the API call failed.
                eprintln!("logout failed: {e}");
                ExitCode::FAILURE
            }
        },
        ["whoami"] => {
            match session.current_identity() {
                Some(identity) => {
                    println!("{} ({})", identity.username(), identity.role_str());
                    if let Some(saved_at) = file_store.saved_at() {
                        println!("session saved at {saved_at}");
                    }
                }
                None if session.is_authenticated() => {
                    println!("authenticated, identity unknown");
                }
                None => println!("anonymous"),
            }
            ExitCode::SUCCESS
        }
        ["check", path] => {
            match registry.resolve(path, &session.auth_state()) {
                RouteDecision::Allow => println!("{path}: allow"),
                RouteDecision::RedirectToLogin => {
                    println!("{path}: redirect to {LOGIN_PATH} (not authenticated)");
                }
                RouteDecision::Redirect(target) => println!("{path}: redirect to {target}"),
            }
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("usage: staffgate-portal <login USER PASS | logout | whoami | check PATH>");
            ExitCode::from(2)
        }
    }
}
