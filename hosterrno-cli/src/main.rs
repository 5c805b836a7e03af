use hosterrno_cli::prelude::*;
fn main() {
    if let Err(err) = run(std::env::args_os()) {
        match err.downcast() {
            Ok(Exit(code)) => std::process::exit(code),
            Err(err) => {
                hosterrno_errors::error!("{err:#}");
                std::process::exit(101);
            }
        }
    }
}
