fn main() {
    // Exit status is decided here only; everything below returns values.
    match transcheck::cli::run() {
        Ok(status) => std::process::exit(status.code()),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
