use anyhow::{Result, anyhow};
use clap::Parser;
use log::debug;
use proof_sdk::types::{
    ListVerificationsParams, ListWebhookDeliveriesParams, VerificationChannel, VerificationStatus,
    VerificationType, WebhookDeliveryStatus,
};
use proof_sdk::{ClientConfig, Proof, ProofError, WaitOptions};
use serde::Serialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// proof - command-line client for the Proof verification API
///
/// Every command prints the API response as pretty-printed JSON.
///
/// Examples:
///   proof verifications get ver_123
///   proof requests wait vr_123 --interval-ms 1000
///   proof proofs validate <TOKEN> --identifier +15555550100
#[derive(Parser, Debug)]
#[command(author, version = proof_sdk::VERSION, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API key (also via PROOF_API_KEY)
    #[arg(
        long = "api-key",
        env = "PROOF_API_KEY",
        hide_env_values = true,
        value_name = "KEY",
        global = true
    )]
    api_key: Option<String>,

    /// API base URL (defaults to https://api.proof.holdings)
    #[arg(long = "base-url", env = "PROOF_BASE_URL", value_name = "URL", global = true)]
    base_url: Option<String>,

    /// Per-attempt request timeout in milliseconds
    #[arg(long = "timeout-ms", env = "PROOF_TIMEOUT_MS", value_name = "MS", global = true)]
    timeout_ms: Option<u64>,

    /// Retries after the first attempt for transient failures
    #[arg(long = "max-retries", env = "PROOF_MAX_RETRIES", value_name = "N", global = true)]
    max_retries: Option<u32>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Single-asset verifications
    Verifications {
        #[command(subcommand)]
        command: VerificationCommand,
    },

    /// Phone-first sessions
    Sessions {
        #[command(subcommand)]
        command: SessionCommand,
    },

    /// Multi-asset verification requests
    Requests {
        #[command(subcommand)]
        command: RequestCommand,
    },

    /// Proof tokens and revocations
    Proofs {
        #[command(subcommand)]
        command: ProofCommand,
    },

    /// Webhook delivery log
    Webhooks {
        #[command(subcommand)]
        command: WebhookCommand,
    },
}

#[derive(clap::Subcommand, Debug)]
enum VerificationCommand {
    /// Show a verification
    Get { id: String },

    /// Wait until a verification is verified, failed, expired or revoked
    Wait {
        id: String,
        #[command(flatten)]
        wait: WaitArgs,
    },

    /// List verifications
    List(ListVerificationsArgs),

    /// Trigger the server-side check for DNS, HTTP or OAuth channels
    Verify { id: String },

    /// Submit the code the end user received
    Submit { id: String, code: String },

    /// Send the challenge again
    Resend { id: String },
}

#[derive(clap::Args, Debug)]
struct ListVerificationsArgs {
    #[arg(long)]
    status: Option<VerificationStatus>,

    #[arg(long = "type")]
    kind: Option<VerificationType>,

    #[arg(long)]
    channel: Option<VerificationChannel>,

    #[arg(long)]
    limit: Option<u32>,

    #[arg(long)]
    page: Option<u32>,
}

#[derive(clap::Subcommand, Debug)]
enum SessionCommand {
    /// Show a session
    Get { id: String },

    /// Wait until a session is verified, failed or expired
    Wait {
        id: String,
        #[command(flatten)]
        wait: WaitArgs,
    },
}

#[derive(clap::Subcommand, Debug)]
enum RequestCommand {
    /// Show a verification request
    Get { id: String },

    /// Wait until a verification request is completed, expired or cancelled
    Wait {
        id: String,
        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Cancel a pending verification request
    Cancel { id: String },

    /// Look a request up by your own reference ID
    ByReference { reference_id: String },
}

#[derive(clap::Subcommand, Debug)]
enum ProofCommand {
    /// Check a proof token online
    Validate {
        token: String,

        /// Identifier the token must belong to
        #[arg(long)]
        identifier: Option<String>,
    },

    /// Revoke the proof issued for a verification
    Revoke {
        verification_id: String,

        #[arg(long)]
        reason: Option<String>,
    },

    /// Show the current revocation list
    Revoked,

    /// Check a proof token's signature locally against the published keys
    VerifyOffline { token: String },
}

#[derive(clap::Subcommand, Debug)]
enum WebhookCommand {
    /// Delivery statistics
    Stats,

    /// List deliveries
    List(ListWebhooksArgs),

    /// Show a delivery
    Get { id: String },

    /// Schedule a failed delivery to be sent again
    Retry { id: String },
}

#[derive(clap::Args, Debug)]
struct ListWebhooksArgs {
    #[arg(long)]
    status: Option<WebhookDeliveryStatus>,

    #[arg(long = "event-type")]
    event_type: Option<String>,

    #[arg(long = "request-id")]
    verification_request_id: Option<String>,

    #[arg(long)]
    limit: Option<u32>,

    #[arg(long)]
    page: Option<u32>,
}

#[derive(clap::Args, Debug)]
struct WaitArgs {
    /// Delay between status checks
    #[arg(long = "interval-ms", value_name = "MS", default_value_t = 3000)]
    interval_ms: u64,

    /// Give up after this long
    #[arg(long = "wait-timeout-ms", value_name = "MS", default_value_t = 600_000)]
    wait_timeout_ms: u64,
}

impl WaitArgs {
    /// Wait options cancelled by Ctrl-C.
    fn options(&self) -> WaitOptions {
        let token = CancellationToken::new();
        let on_ctrl_c = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("Ctrl-C received, cancelling wait");
                on_ctrl_c.cancel();
            }
        });

        WaitOptions::default()
            .with_interval(Duration::from_millis(self.interval_ms))
            .with_timeout(Duration::from_millis(self.wait_timeout_ms))
            .with_cancellation(token)
    }
}

impl Cli {
    fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.api_key.clone().unwrap_or_default());
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(ms) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(ms));
        }
        if let Some(max_retries) = self.max_retries {
            config = config.with_max_retries(max_retries);
        }
        config
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Adds the error code and status to API failures.
fn describe(err: anyhow::Error) -> anyhow::Error {
    match err.downcast::<ProofError>() {
        Ok(e) if e.status_code() > 0 => {
            anyhow!("{} ({}, HTTP {})", e, e.code(), e.status_code())
        }
        Ok(e) => anyhow!("{} ({})", e, e.code()),
        Err(e) => e,
    }
}

async fn run(cli: Cli) -> Result<()> {
    let proof = Proof::with_config(cli.config())?;

    match cli.command {
        Commands::Verifications { command } => match command {
            VerificationCommand::Get { id } => {
                print_json(&proof.verifications.retrieve(&id).await?)
            }
            VerificationCommand::Wait { id, wait } => print_json(
                &proof
                    .verifications
                    .wait_for_completion(&id, &wait.options())
                    .await?,
            ),
            VerificationCommand::List(args) => {
                let params = ListVerificationsParams {
                    status: args.status,
                    kind: args.kind,
                    channel: args.channel,
                    limit: args.limit,
                    page: args.page,
                };
                print_json(&proof.verifications.list(&params).await?)
            }
            VerificationCommand::Verify { id } => {
                print_json(&proof.verifications.verify(&id).await?)
            }
            VerificationCommand::Submit { id, code } => {
                print_json(&proof.verifications.submit(&id, &code).await?)
            }
            VerificationCommand::Resend { id } => {
                print_json(&proof.verifications.resend(&id).await?)
            }
        },
        Commands::Sessions { command } => match command {
            SessionCommand::Get { id } => print_json(&proof.sessions.retrieve(&id).await?),
            SessionCommand::Wait { id, wait } => print_json(
                &proof
                    .sessions
                    .wait_for_completion(&id, &wait.options())
                    .await?,
            ),
        },
        Commands::Requests { command } => match command {
            RequestCommand::Get { id } => {
                print_json(&proof.verification_requests.retrieve(&id).await?)
            }
            RequestCommand::Wait { id, wait } => print_json(
                &proof
                    .verification_requests
                    .wait_for_completion(&id, &wait.options())
                    .await?,
            ),
            RequestCommand::Cancel { id } => {
                print_json(&proof.verification_requests.cancel(&id).await?)
            }
            RequestCommand::ByReference { reference_id } => print_json(
                &proof
                    .verification_requests
                    .get_by_reference(&reference_id)
                    .await?,
            ),
        },
        Commands::Proofs { command } => match command {
            ProofCommand::Validate { token, identifier } => print_json(
                &proof
                    .proofs
                    .validate(&token, identifier.as_deref())
                    .await?,
            ),
            ProofCommand::Revoke {
                verification_id,
                reason,
            } => print_json(
                &proof
                    .proofs
                    .revoke(&verification_id, reason.as_deref())
                    .await?,
            ),
            ProofCommand::Revoked => print_json(&proof.proofs.list_revoked().await?),
            ProofCommand::VerifyOffline { token } => {
                print_json(&proof.proofs.verify_offline(&token).await)
            }
        },
        Commands::Webhooks { command } => match command {
            WebhookCommand::Stats => print_json(&proof.webhook_deliveries.stats().await?),
            WebhookCommand::List(args) => {
                let params = ListWebhookDeliveriesParams {
                    status: args.status,
                    event_type: args.event_type,
                    verification_request_id: args.verification_request_id,
                    limit: args.limit,
                    page: args.page,
                };
                print_json(&proof.webhook_deliveries.list(&params).await?)
            }
            WebhookCommand::Get { id } => {
                print_json(&proof.webhook_deliveries.retrieve(&id).await?)
            }
            WebhookCommand::Retry { id } => {
                print_json(&proof.webhook_deliveries.retry(&id).await?)
            }
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    run(cli).await.map_err(describe)
}
