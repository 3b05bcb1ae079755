use crate::commands::{self, EvaluateArgs, ListArgs, PositionArgs, UserArgs};
use crate::server;
use candidate_eval::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "candidate-desk",
    about = "Evaluate interview candidates, review the hiring dashboard, and issue offer letters",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a candidate and append them to the data file
    Evaluate(EvaluateArgs),
    /// List candidates in the order they were evaluated
    List(ListArgs),
    /// Show the detail view for one candidate
    Show(PositionArgs),
    /// Print the hiring dashboard
    Dashboard,
    /// Write the HTML offer letter for a hired candidate
    Offer(PositionArgs),
    /// Report candidates whose stored verdict differs from the current rule
    Recheck,
    /// Register or sign in evaluators
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },
}

#[derive(Subcommand, Debug)]
enum UsersCommand {
    /// Register a new evaluator account
    Register(UserArgs),
    /// Check a username and password
    Login(UserArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => commands::evaluate(args),
        Command::List(args) => commands::list(args),
        Command::Show(args) => commands::show(args),
        Command::Dashboard => commands::dashboard(),
        Command::Offer(args) => commands::offer(args),
        Command::Recheck => commands::recheck(),
        Command::Users {
            command: UsersCommand::Register(args),
        } => commands::register(args),
        Command::Users {
            command: UsersCommand::Login(args),
        } => commands::login(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["candidate-desk"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn evaluate_keeps_scores_as_raw_text() {
        let cli = Cli::try_parse_from([
            "candidate-desk",
            "evaluate",
            "--name",
            "Ada Lovelace",
            "--email",
            "ada",
            "--role",
            "QA Analyst",
            "--tech",
            "ninety",
            "--comm",
            "80",
            "--experience",
            "3",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.tech, "ninety");
                assert_eq!(args.photo, None);
            }
            other => panic!("expected evaluate, got {other:?}"),
        }
    }

    #[test]
    fn users_login_parses_credentials() {
        let cli = Cli::try_parse_from([
            "candidate-desk",
            "users",
            "login",
            "--username",
            "admin",
            "--password",
            "admin",
        ])
        .expect("parses");

        assert!(matches!(
            cli.command,
            Some(Command::Users {
                command: UsersCommand::Login(_)
            })
        ));
    }
}
