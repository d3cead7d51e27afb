use std::io;

fn main() {
    ratongato_cli::logging::init_logging();
    let code = ratongato_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
