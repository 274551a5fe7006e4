use std::io::{self, Write};

use tracing::debug;

use k8s_check::check::{Dispatcher, EXIT_SUCCESS};
use k8s_check::cli::{self, Parsed};
use k8s_check::config::Config;
use k8s_check::logging;
use k8s_check::runner::ShellRunner;
use k8s_check::store::FileLockStore;

fn main() {
    let code = run();
    let _ = io::stdout().flush();
    std::process::exit(code);
}

/// Everything up to the exit code. Result lines go to stdout.
fn run() -> i32 {
    let args = std::env::args_os().map(|a| a.to_string_lossy().into_owned());

    let action = match cli::parse_args(args) {
        Ok(Parsed::Action(action)) => action,
        Ok(Parsed::Info(text)) => {
            let _ = write!(io::stdout(), "{}", text);
            return EXIT_SUCCESS;
        }
        Err(e) => {
            let _ = writeln!(io::stdout(), "{}", e);
            return e.exit_code();
        }
    };

    let config = Config::from_env();

    logging::init(&config.logging);
    config.log_summary();
    debug!(check = %action.check(), ?action, "Dispatching");

    let dispatcher = Dispatcher::new(
        FileLockStore::new(&config.store.lock_dir),
        ShellRunner::new(config.runner.shell),
        config.commands,
    );

    let outcome = dispatcher.dispatch(action, &mut io::stdout());
    // Ignored: the exit code still reaches a caller that closed stdout.
    let _ = writeln!(io::stdout(), "{}", outcome);

    outcome.exit_code()
}
