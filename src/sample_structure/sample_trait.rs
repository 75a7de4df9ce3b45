use crate::config::GlobalConfig;
use crate::result::error::Result;
use crate::sample_structure::telemetry::init_tracing;
use async_trait::async_trait;
use clap::Parser;
use common::aws_clients::iam::get_iam_client;
use common::config::aws_client_config::AwsClientConfig;
use common::config::ConfigLoader;
use rusoto_iam::IamClient;
use std::fmt::Debug;
use std::process::ExitCode;
use validator::Validate;

#[async_trait]
pub trait Sample {
    /// Command line arguments. Validated before any AWS client is built.
    type Args: Parser + Validate + Debug + Send + Sync;
    type PersistedMemory: Sync + Send;

    /// Builds whatever the sample needs (usually one repository) out of the configured client.
    fn bootstrap(iam_client: IamClient) -> Self::PersistedMemory;

    /// Performs the sample's single IAM call and reports whether it succeeded.
    async fn run(args: Self::Args, persisted: &Self::PersistedMemory) -> bool;

    /// A pre-configured main function: parses arguments, sets up logging and the client, then
    /// calls [`Sample::run`]. Call this from the top-level main function of a given sample.
    async fn main() -> ExitCode {
        let args = match Self::Args::try_parse() {
            Ok(args) => args,
            Err(e) => {
                return if report_parse_error(&e) {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                };
            }
        };

        let config = ConfigLoader::load_default::<GlobalConfig>();
        let level = config
            .as_ref()
            .map(|c| c.log_level)
            .unwrap_or_else(|_| GlobalConfig::default().log_level);

        let _guard = match init_tracing(level) {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        };

        if let Err(e) = config {
            tracing::warn!(error = %e, "falling back to default log level");
        }

        match Self::execute(args).await {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(e) => {
                tracing::error!(error = %e, "sample could not run");
                ExitCode::FAILURE
            }
        }
    }

    async fn execute(args: Self::Args) -> Result<bool> {
        args.validate()?;

        tracing::info!(args = ?args, "Execution started");

        let client_config = ConfigLoader::load_default::<AwsClientConfig>()?;
        let iam_client = get_iam_client(&client_config)?;
        let persisted = Self::bootstrap(iam_client);

        Ok(Self::run(args, &persisted).await)
    }
}

/// Prints usage, help or version output and tells whether parsing actually failed. Help and
/// version requests are not failures.
fn report_parse_error(e: &clap::Error) -> bool {
    if let Err(print_error) = e.print() {
        eprintln!("{e}");
        eprintln!("Could not print to the terminal: {print_error}");
    }
    e.use_stderr()
}

#[macro_export]
macro_rules! sample_main {
    ($sample: ty) => {
        #[tokio::main]
        async fn main() -> std::process::ExitCode {
            use $crate::sample_structure::sample_trait::Sample;
            <$sample>::main().await
        }
    };
}
