//! Cyber IA CLI: runs dashboard actions against the analysis backend.
//!
//! Usage:
//!   cyber-ia-cli health                              Backend health and module status
//!   cyber-ia-cli quick-scan <target>                 Quick port scan
//!   cyber-ia-cli ssh-audit <log-file>                Audit an SSH auth log
//!   cyber-ia-cli password <value>                    Password strength
//!   cyber-ia-cli phishing [--sender S] [--subject S] [--body B]

use anyhow::{bail, Context};
use cyber_ia_client::dashboard::{NetworkScanPage, PasswordPage, PhishingPage};
use cyber_ia_client::lifecycle::{Notifier, TracingNotifier};
use cyber_ia_client::types::PhishingDetectRequest;
use cyber_ia_client::{CyberClient, ErrorEnvelope, KeyringTokenStore, Session};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "health" => cmd_health().await,
        "quick-scan" => cmd_quick_scan(&args[2..]).await,
        "ssh-audit" => cmd_ssh_audit(&args[2..]).await,
        "password" => cmd_password(&args[2..]).await,
        "phishing" => cmd_phishing(&args[2..]).await,
        "version" | "--version" | "-V" => {
            println!("cyber-ia-cli {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"cyber-ia-cli — Cyber IA backend from the command line

USAGE:
    cyber-ia-cli <COMMAND> [OPTIONS]

COMMANDS:
    health                                   Backend health and module status
    quick-scan <target>                      Quick port scan of an IP or domain
    ssh-audit <log-file>                     Audit an SSH auth log file
    password <value>                         Password strength analysis
    phishing [--sender S] [--subject S] [--body B]
                                             Phishing detection for an email
    version                                  Show version information
    help                                     Show this help message

ENVIRONMENT:
    CYBER_IA_API_URL                         Backend base URL (default http://localhost:8000)
    CYBER_IA_HTTP_TIMEOUT_SECS               Standard request deadline
    CYBER_IA_UPLOAD_TIMEOUT_SECS             File upload deadline
    RUST_LOG                                 Log filter (default info)"#
    );
}

fn client() -> anyhow::Result<CyberClient> {
    let session = match Session::restore(Arc::new(KeyringTokenStore::new())) {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "keyring unavailable, continuing without a stored token");
            Session::new()
        }
    };
    CyberClient::builder()
        .session(session)
        .build()
        .context("failed to configure the client")
}

fn notifier() -> Arc<dyn Notifier> {
    Arc::new(TracingNotifier)
}

fn print_outcome<T: Serialize>(outcome: Result<T, ErrorEnvelope>) -> anyhow::Result<()> {
    match outcome {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(e) => bail!("[{}] {}", e.kind(), e.message()),
    }
}

fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

async fn cmd_health() -> anyhow::Result<()> {
    let health = client()?.health_check().await;
    if let Ok(h) = &health {
        for module in h.inactive_modules() {
            warn!(module, "backend module inactive");
        }
    }
    print_outcome(health)
}

async fn cmd_quick_scan(args: &[String]) -> anyhow::Result<()> {
    let target = args.first().map(String::as_str).unwrap_or_default();
    let page = NetworkScanPage::new(client()?, notifier());
    print_outcome(page.quick_scan(target).await)
}

async fn cmd_ssh_audit(args: &[String]) -> anyhow::Result<()> {
    let Some(path) = args.first() else {
        bail!("usage: cyber-ia-cli ssh-audit <log-file>");
    };
    let page = NetworkScanPage::new(client()?, notifier());
    let content = page
        .read_log_file(path)
        .await
        .with_context(|| format!("cannot read {path}"))?;
    page.set_ssh_logs(content);
    print_outcome(page.ssh_audit().await)
}

async fn cmd_password(args: &[String]) -> anyhow::Result<()> {
    let password = args.first().map(String::as_str).unwrap_or_default();
    let page = PasswordPage::new(client()?, notifier());
    let outcome = page.analyze(password).await;
    if let Ok(analysis) = &outcome {
        println!("Force: {} ({}%)", analysis.strength_label(), analysis.percent());
    }
    print_outcome(outcome)
}

async fn cmd_phishing(args: &[String]) -> anyhow::Result<()> {
    let request = PhishingDetectRequest::from_fields(
        flag(args, "--sender").unwrap_or_default(),
        flag(args, "--subject").unwrap_or_default(),
        flag(args, "--body").unwrap_or_default(),
    );
    let page = PhishingPage::new(client()?, notifier());
    print_outcome(page.analyze(&request).await)
}
