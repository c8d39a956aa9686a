//! dnspod-ddns - dynamic DNS updater for the DNSPod legacy JSON API.

use anyhow::Context;
use clap::Parser;
use dnspod_ddns::params::field_text;
use dnspod_ddns::{Credentials, DnspodClient, Params};
use std::net::IpAddr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dnspod-ddns")]
#[command(about = "Update a DNSPod DNS record to point at this machine")]
#[command(version)]
struct Cli {
    /// DNSPod account email
    email: String,

    /// DNSPod account password
    password: String,

    /// Record to update, in dotted form "record.domain"
    subdomain: String,

    /// Target IP (defaults to this machine's own address)
    #[arg(long)]
    ip: Option<IpAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let (record, domain) = cli
        .subdomain
        .split_once('.')
        .with_context(|| format!("subdomain must be \"record.domain\", got {}", cli.subdomain))?;

    let ip = match cli.ip {
        Some(ip) => ip,
        None => dnspod_ddns::detector::local_ip().await?,
    };

    let client = DnspodClient::new(Credentials::new(cli.email, cli.password));

    let mut overrides = Params::new();
    overrides.insert("value".to_string(), ip.to_string());

    let result = client.update_record(domain, record, overrides).await?;
    let status = result.field("status").await?;

    println!("{}", field_text(&status, "message")?);
    Ok(())
}
