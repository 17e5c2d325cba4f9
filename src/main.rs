fn main() {
    std::process::exit(muxmenu::cli::run());
}
