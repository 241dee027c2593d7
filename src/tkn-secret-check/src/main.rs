use std::fs::File;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Context;
use clap::Parser;
use tracing::debug;

use tkn_config::DashboardConfig;
use tkn_dashboard::secret::SecretForm;
use tkn_dashboard::secret::SecretFormSession;
use tkn_dashboard::NamespaceSelection;

const LOG_ENV: &str = "RUST_LOG";

/// Checks a create secret form written as yaml.
/// Prints field errors, or the secret manifest when the form is valid.
#[derive(Debug, Parser)]
#[command(name = "tkn-secret-check")]
struct Args {
    /// yaml file with the form values
    form: PathBuf,

    /// namespace used when the form has none
    #[arg(short, long)]
    namespace: Option<String>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = DashboardConfig::load()?;
    if let (Some(filter), Err(_)) = (&config.log_filter, std::env::var(LOG_ENV)) {
        std::env::set_var(LOG_ENV, filter);
    }
    fluvio_future::subscriber::init_tracer(None);

    if config.read_only {
        bail!("dashboard is read only, secrets can not be created");
    }

    let file = File::open(&args.form)
        .with_context(|| format!("unable to open {}", args.form.display()))?;
    let mut form: SecretForm = serde_yaml::from_reader(file)
        .with_context(|| format!("invalid form {}", args.form.display()))?;

    if form.namespace.is_none() {
        let selection = match args.namespace {
            Some(namespace) => NamespaceSelection::from(Some(namespace)),
            None => NamespaceSelection::initial(&config, config.kube_config().as_ref()),
        };
        debug!("namespace from settings: {}", selection);
        form.namespace = selection.as_option().map(str::to_owned);
    }

    let mut session = SecretFormSession::with_form(form);
    match session.submit() {
        Ok(request) => {
            print!("{}", serde_yaml::to_string(&request.to_input())?);
            Ok(())
        }
        Err(errors) => {
            print!("{}", errors);
            bail!("{} invalid fields", errors.len())
        }
    }
}
