fn main() {
    match cityroute::run() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    }
}
