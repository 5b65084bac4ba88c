fn main() {
    if let Err(e) = sqlrpn_cli::run(std::env::args().collect()) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
